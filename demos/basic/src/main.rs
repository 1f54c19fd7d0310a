/**
 * Minimal sender harness for the beacon notification crates.
 *
 * Builds a sample job-state record and delivers it to the destination
 * given on the command line:
 *
 *   cargo run -p beacon_demo -- http://localhost:8080/notify
 *   cargo run -p beacon_demo -- localhost:9999 --transport udp
 *   cargo run -p beacon_demo -- localhost:9999 --transport tcp --format xml
 *
 * Point it at `nc -l 9999` (tcp) or `nc -lu 9999` (udp) to watch the
 * payload arrive.
 */
use std::process::ExitCode;
use std::time::Duration;

use beacon::{BuildState, BuildStatus, Format, JobState, Phase, Transport};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(destination) = args.first().cloned() else {
        eprintln!("usage: beacon_demo <destination> [--transport udp|tcp|http] [--format json|xml]");
        return ExitCode::FAILURE;
    };

    let transport = match flag_value(&args, "--transport").unwrap_or("http").parse::<Transport>() {
        Ok(t) => t,
        Err(e) => {
            eprintln!("[demo] {e}");
            return ExitCode::FAILURE;
        }
    };
    let format = match flag_value(&args, "--format").unwrap_or("json").parse::<Format>() {
        Ok(f) => f,
        Err(e) => {
            eprintln!("[demo] {e}");
            return ExitCode::FAILURE;
        }
    };

    /*
     * Fail fast on a bad destination before attempting delivery — the same
     * check a host would run at configuration time.
     */
    if let Err(e) = beacon::validate(transport, &destination) {
        eprintln!("[demo] {e}");
        return ExitCode::FAILURE;
    }

    let state = JobState {
        name: "nightly".into(),
        display_name: Some("Nightly build".into()),
        url: "job/nightly/".into(),
        build: BuildState {
            number: 42,
            phase: Phase::Completed,
            status: Some(BuildStatus::Success),
            url: "job/nightly/42/".into(),
            full_url: Some("http://ci.example.com/job/nightly/42/".into()),
            ..Default::default()
        },
    };

    match beacon::notify(transport, &destination, &state, format, Duration::from_secs(30)) {
        Ok(()) => {
            println!("[demo] {format} notification sent over {transport} to {destination}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("[demo] delivery failed: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Returns the value following `name` in `args`, if present.
fn flag_value<'a>(args: &'a [String], name: &str) -> Option<&'a str> {
    let i = args.iter().position(|a| a == name)?;
    args.get(i + 1).map(String::as_str)
}
