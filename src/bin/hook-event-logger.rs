use hook_event_logger::environment::HookEnvironment;
use hook_event_logger::events::usage_text;
use hook_event_logger::recorder::run_hook;
use hook_event_logger::sanitize::SanitizeLimits;

fn wants_help(args: &[String]) -> bool {
    args.iter().any(|arg| arg == "--help" || arg == "-h")
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if wants_help(&args) {
        println!("{}", usage_text());
        return;
    }

    // Failures are reported by run_hook as a single diagnostic line.
    std::panic::set_hook(Box::new(|_| {}));

    let stdin = std::io::stdin();
    let mut stderr = std::io::stderr();
    let _ = run_hook(
        stdin.lock(),
        &mut stderr,
        &SanitizeLimits::default(),
        HookEnvironment::from_process,
    );
}
