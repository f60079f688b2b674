fn main() {
    menubar::run();
}
