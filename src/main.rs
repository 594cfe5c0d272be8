fn main() {
    accept_all::cli::run();
}
