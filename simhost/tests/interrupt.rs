use nix::sys::signal::{Signal, kill};
use nix::unistd::Pid;
use pretty_assertions::assert_eq;
use std::io::{BufRead, BufReader, Read};
use std::net::TcpListener;
use std::process::{Command, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;
use tempfile::tempdir;

fn free_port() -> u16 {
    TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}

#[test]
fn ctrl_c_prints_notice_and_exits_zero() {
    let root = tempdir().unwrap();
    std::fs::write(root.path().join("index.html"), "<h1>sim</h1>").unwrap();

    let port = free_port();
    let mut child = Command::new(env!("CARGO_BIN_EXE_simhost"))
        .args(["--listen", &format!("127.0.0.1:{port}"), "--threads", "1"])
        .arg("--root")
        .arg(root.path())
        .env("RUST_LOG", "off")
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    let mut stdout = BufReader::new(child.stdout.take().unwrap());

    // The banner is printed once the interrupt handler is installed.
    let mut banner = String::new();
    stdout.read_line(&mut banner).unwrap();
    assert_eq!(
        banner.trim_end(),
        format!(">> Running simulation on http://localhost:{port}")
    );

    kill(Pid::from_raw(child.id() as i32), Signal::SIGINT).unwrap();

    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut rest = String::new();
        stdout.read_to_string(&mut rest).unwrap();
        tx.send((child.wait().unwrap(), rest)).unwrap();
    });

    let (status, rest) = rx
        .recv_timeout(Duration::from_secs(10))
        .expect("simhost did not exit after SIGINT");

    assert_eq!(status.code(), Some(0));
    assert!(
        rest.contains("!! Keyboard interrupt received, exiting !!"),
        "unexpected stdout: {rest:?}"
    );
}
