fn main() {
    vitalsense_lib::run()
}
