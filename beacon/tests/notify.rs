//! Facade-level test: one `notify()` call serializes the record and
//! delivers the bytes.

use std::io::Read;
use std::net::TcpListener;
use std::thread;
use std::time::Duration;

use beacon::{BuildState, Format, JobState, Phase, Transport};

#[test]
fn notify_serializes_and_delivers_in_one_call() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();

    let observed = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut body = Vec::new();
        stream.read_to_end(&mut body).unwrap();
        body
    });

    let state = JobState {
        name: "nightly".into(),
        url: "job/nightly/".into(),
        build: BuildState {
            number: 7,
            phase: Phase::Started,
            url: "job/nightly/7/".into(),
            ..Default::default()
        },
        ..Default::default()
    };

    beacon::notify(
        Transport::Tcp,
        &format!("127.0.0.1:{port}"),
        &state,
        Format::Json,
        Duration::from_secs(5),
    )
    .unwrap();

    let body = observed.join().unwrap();
    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["name"], "nightly");
    assert_eq!(value["build"]["number"], 7);
    assert_eq!(value["build"]["phase"], "STARTED");
}

#[test]
fn validate_is_reachable_through_the_facade() {
    let err = beacon::validate(Transport::Http, "definitely wrong").unwrap_err();
    assert!(err.to_string().contains("definitely wrong"));
    assert!(beacon::validate(Transport::Tcp, "loghost:514").is_ok());
}
