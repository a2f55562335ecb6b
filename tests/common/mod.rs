//! Shared harness for the HTTP tests: spawns the compiled binary on a free
//! port with env overrides and tears it down when the suite exits.

#![allow(dead_code)]

use reqwest::Client;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};
use tokio::time::sleep;

pub struct TestServer {
    pub base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

#[cfg(unix)]
mod cleanup {
    use std::sync::{Mutex, Once};

    static REGISTER: Once = Once::new();
    static PIDS: Mutex<Vec<i32>> = Mutex::new(Vec::new());

    pub fn register(pid: u32) {
        REGISTER.call_once(|| unsafe {
            libc::atexit(on_exit);
        });
        PIDS.lock().unwrap().push(pid as i32);
    }

    extern "C" fn on_exit() {
        if let Ok(pids) = PIDS.lock() {
            for pid in pids.iter().copied().filter(|pid| *pid > 0) {
                unsafe {
                    libc::kill(pid, libc::SIGTERM);
                }
            }
        }
    }
}

pub fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

/// A seed URL nothing listens on, so the fetch fails fast and the diary
/// starts empty.
pub fn unreachable_seed_url() -> String {
    format!("http://127.0.0.1:{}/comments", pick_free_port())
}

pub async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/stats")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

pub async fn spawn_server(seed_url: &str) -> TestServer {
    let port = pick_free_port();
    let child = Command::new(env!("CARGO_BIN_EXE_diary_app"))
        .env("PORT", port.to_string())
        .env("DIARY_SEED_URL", seed_url)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}
