//! Test utilities for citadel-core.
//!
//! Scripted transport, recording sleeper and canned API payloads shared by
//! the unit tests. Only compiled when running tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::FetchError;
use crate::fetch::Sleeper;
use crate::transport::{HttpResponse, HttpTransport};

/// Transport that replays a fixed list of responses and records every URL.
///
/// Clones share the script and the call log, so a test can keep a handle
/// after moving a clone into a controller.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    script: Rc<RefCell<VecDeque<Result<HttpResponse, FetchError>>>>,
    calls: Rc<RefCell<Vec<String>>>,
}

impl ScriptedTransport {
    pub fn new(script: Vec<Result<HttpResponse, FetchError>>) -> Self {
        Self {
            script: Rc::new(RefCell::new(script.into())),
            calls: Rc::default(),
        }
    }

    /// URLs requested so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl HttpTransport for ScriptedTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        self.calls.borrow_mut().push(url.to_string());
        self.script
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::Network("script exhausted".to_string())))
    }
}

/// Sleeper that returns immediately and records the requested durations.
#[derive(Clone, Default)]
pub struct RecordingSleeper {
    delays: Rc<RefCell<Vec<Duration>>>,
}

impl RecordingSleeper {
    pub fn delays(&self) -> Vec<Duration> {
        self.delays.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.delays.borrow_mut().push(duration);
    }
}

/// Abridged copy of the API's character #1.
pub fn rick_json() -> String {
    r#"{
        "id": 1,
        "name": "Rick Sanchez",
        "status": "Alive",
        "species": "Human",
        "type": "",
        "gender": "Male",
        "origin": {"name": "Earth (C-137)", "url": "https://rickandmortyapi.com/api/location/1"},
        "location": {"name": "Citadel of Ricks", "url": "https://rickandmortyapi.com/api/location/3"},
        "image": "https://rickandmortyapi.com/api/character/avatar/1.jpeg",
        "episode": ["https://rickandmortyapi.com/api/episode/1"],
        "url": "https://rickandmortyapi.com/api/character/1",
        "created": "2017-11-04T18:48:46.250Z"
    }"#
    .to_string()
}

/// Abridged copy of the API's character #2.
pub fn morty_json() -> String {
    r#"{
        "id": 2,
        "name": "Morty Smith",
        "status": "unknown",
        "species": "Human",
        "type": "",
        "gender": "Male",
        "origin": {"name": "unknown", "url": ""},
        "location": {"name": "Citadel of Ricks", "url": "https://rickandmortyapi.com/api/location/3"},
        "image": "https://rickandmortyapi.com/api/character/avatar/2.jpeg"
    }"#
    .to_string()
}

/// Wraps character objects in a page body with `info`.
pub fn page_json(characters: &[String]) -> String {
    format!(
        r#"{{"info": {{"count": {}, "pages": 1, "next": null, "prev": null}}, "results": [{}]}}"#,
        characters.len(),
        characters.join(",")
    )
}

/// 200 OK carrying a page of the given characters.
pub fn ok_page(characters: &[String]) -> Result<HttpResponse, FetchError> {
    Ok(HttpResponse::new(200, "OK", page_json(characters)))
}
