fn main() {
    scribe_web::start();
}
