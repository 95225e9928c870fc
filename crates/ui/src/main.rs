fn main() {
    meltcd_ui::start();
}
