//! ノート中のメールアドレスのリンク化

use regex::Regex;

lazy_static::lazy_static! {
    // local@domain.tld 形式
    static ref EMAIL_RE: Regex =
        Regex::new(r"[a-zA-Z0-9._-]+@[a-zA-Z0-9._-]+\.[a-zA-Z0-9_-]+").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteSegment {
    Text(String),
    Email(String),
}

impl NoteSegment {
    /// Emailなら `mailto:` リンク先
    pub fn href(&self) -> Option<String> {
        match self {
            NoteSegment::Email(address) => Some(mailto(address)),
            NoteSegment::Text(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            NoteSegment::Text(text) | NoteSegment::Email(text) => text,
        }
    }
}

pub fn mailto(address: &str) -> String {
    format!("mailto:{}", address)
}

/// すべてのメールアドレスを Email セグメントに分割する
pub fn linkify_emails(note: &str) -> Vec<NoteSegment> {
    let mut segments = Vec::new();
    let mut last = 0;

    for m in EMAIL_RE.find_iter(note) {
        if m.start() > last {
            segments.push(NoteSegment::Text(note[last..m.start()].to_string()));
        }
        segments.push(NoteSegment::Email(m.as_str().to_string()));
        last = m.end();
    }

    if last < note.len() {
        segments.push(NoteSegment::Text(note[last..].to_string()));
    }

    segments
}
