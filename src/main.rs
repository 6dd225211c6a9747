fn main() {
    django_setup::app::cli::run();
}
