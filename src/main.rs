fn main() {
    mdkindle::app::cli::run();
}
