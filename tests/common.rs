#![allow(dead_code)]
use wfotracker::models::training::TrainingRecord;

/// A small roster useful for many tests.
pub fn sample_records() -> Vec<TrainingRecord> {
    vec![
        record(1, "Alice Smith", "Rust Basics,Advanced Rust", "Technical", "Online", "Completed"),
        record(2, "Bob Jones", "Leadership 101", "Soft Skills", "Classroom", "Planned"),
        record(3, "Carol White", "Rust Basics", "Technical", "Classroom", "In Progress"),
    ]
}

pub fn record(
    id: i64,
    name: &str,
    titles: &str,
    training_type: &str,
    mode: &str,
    status: &str,
) -> TrainingRecord {
    TrainingRecord {
        id: Some(id),
        name: name.to_string(),
        training_title: titles.to_string(),
        training_type: training_type.to_string(),
        mode: mode.to_string(),
        planned_date: "2024-01-15".to_string(),
        start_date: "2024-02-01".to_string(),
        end_date: "2024-03-01".to_string(),
        status: status.to_string(),
    }
}

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

/// Canned-response HTTP store for end-to-end command tests. Each route
/// is `(method + path prefix, status, JSON body)`; the first route
/// whose prefix matches the request line answers it, anything else
/// gets a 404. Returns the base URL to pass via `--server`.
pub fn spawn_store(routes: &'static [(&'static str, u16, &'static str)]) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub store");
    let addr = listener.local_addr().expect("stub store addr");

    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { continue };
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];

            while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut chunk) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => buf.extend_from_slice(&chunk[..n]),
                }
            }

            let (line, headers_end, content_length) = {
                let head = String::from_utf8_lossy(&buf);
                let line = head.lines().next().unwrap_or("").to_string();
                let headers_end = buf
                    .windows(4)
                    .position(|w| w == b"\r\n\r\n")
                    .map(|p| p + 4)
                    .unwrap_or(buf.len());
                let content_length = head
                    .lines()
                    .find(|l| l.to_ascii_lowercase().starts_with("content-length:"))
                    .and_then(|l| l.split(':').nth(1))
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                (line, headers_end, content_length)
            };

            // drain the request body before answering
            while buf.len() < headers_end + content_length {
                match stream.read(&mut chunk) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => buf.extend_from_slice(&chunk[..n]),
                }
            }

            let (status, body) = routes
                .iter()
                .find(|(prefix, _, _)| line.starts_with(prefix))
                .map(|(_, status, body)| (*status, *body))
                .unwrap_or((404, "{}"));
            let reason = if status < 400 { "OK" } else { "Error" };
            let response = format!(
                "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });

    format!("http://{addr}")
}
