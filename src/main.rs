fn main() -> std::process::ExitCode {
    leetlog_lib::run()
}
