// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! A scripted [`MediaService`] for controller tests.
//!
//! Every call is recorded when it starts and again when it completes, and
//! responses can be delayed (on the tokio clock) or made to fail.

use std::{
    collections::{HashMap, VecDeque},
    sync::Mutex,
    time::Duration,
};

use async_trait::async_trait;

use crate::{
    error::ServiceError,
    model::{
        CollectionEntry, CollectionFilter, MediaDetail, SearchResult, StatusUpdate, TrackedStatus,
    },
    service::MediaService,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Search(String),
    FetchMedia(String),
    FetchStatus(String, String),
    Upsert(StatusUpdate),
    Remove(String, String),
    ListCollection(String, CollectionFilter),
}

#[derive(Default)]
pub(crate) struct ScriptedService {
    started: Mutex<Vec<Call>>,
    completed: Mutex<Vec<Call>>,
    search_delays: Mutex<HashMap<String, Duration>>,
    search_failures: Mutex<HashMap<String, u16>>,
    write_delays: Mutex<VecDeque<Duration>>,
    write_failure: Mutex<Option<u16>>,
    media: Mutex<HashMap<String, MediaDetail>>,
    statuses: Mutex<HashMap<(String, String), TrackedStatus>>,
}

impl ScriptedService {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn delay_search(&self, query: &str, delay: Duration) {
        self.search_delays.lock().unwrap().insert(query.to_string(), delay);
    }

    pub(crate) fn fail_search(&self, query: &str, status: u16) {
        self.search_failures.lock().unwrap().insert(query.to_string(), status);
    }

    /// Delays the next status write (upsert or remove) by `delay`.
    pub(crate) fn delay_next_write(&self, delay: Duration) {
        self.write_delays.lock().unwrap().push_back(delay);
    }

    pub(crate) fn fail_writes(&self, status: u16) {
        *self.write_failure.lock().unwrap() = Some(status);
    }

    pub(crate) fn insert_media(&self, media_id: &str, detail: MediaDetail) {
        self.media.lock().unwrap().insert(media_id.to_string(), detail);
    }

    pub(crate) fn insert_status(&self, user_id: &str, media_id: &str, status: TrackedStatus) {
        self.statuses
            .lock()
            .unwrap()
            .insert((user_id.to_string(), media_id.to_string()), status);
    }

    /// Calls in the order they started.
    pub(crate) fn started(&self) -> Vec<Call> {
        self.started.lock().unwrap().clone()
    }

    /// Calls in the order they completed.
    pub(crate) fn completed(&self) -> Vec<Call> {
        self.completed.lock().unwrap().clone()
    }

    pub(crate) fn searches(&self) -> Vec<String> {
        self.started()
            .into_iter()
            .filter_map(|call| match call {
                Call::Search(query) => Some(query),
                _ => None,
            })
            .collect()
    }

    /// The single canned suggestion returned for `query`.
    pub(crate) fn suggestion_for(query: &str) -> SearchResult {
        SearchResult::new(&format!("id-{}", query), query, "2001", "movie")
    }

    fn start(&self, call: &Call) {
        self.started.lock().unwrap().push(call.clone());
    }

    fn finish(&self, call: Call) {
        self.completed.lock().unwrap().push(call);
    }

    async fn write(&self, call: Call) -> Result<(), ServiceError> {
        self.start(&call);

        let delay = self.write_delays.lock().unwrap().pop_front();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let failure = *self.write_failure.lock().unwrap();
        self.finish(call);

        match failure {
            Some(status) => Err(ServiceError::Status(status)),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl MediaService for ScriptedService {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ServiceError> {
        let call = Call::Search(query.to_string());
        self.start(&call);

        let delay = self.search_delays.lock().unwrap().get(query).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let failure = self.search_failures.lock().unwrap().get(query).copied();
        self.finish(call);

        match failure {
            Some(status) => Err(ServiceError::Status(status)),
            None => Ok(vec![Self::suggestion_for(query)]),
        }
    }

    async fn fetch_media(&self, media_id: &str) -> Result<Option<MediaDetail>, ServiceError> {
        let call = Call::FetchMedia(media_id.to_string());
        self.start(&call);
        self.finish(call);

        Ok(self.media.lock().unwrap().get(media_id).cloned())
    }

    async fn fetch_status(
        &self,
        user_id: &str,
        media_id: &str,
    ) -> Result<Option<TrackedStatus>, ServiceError> {
        let call = Call::FetchStatus(user_id.to_string(), media_id.to_string());
        self.start(&call);
        self.finish(call);

        let key = (user_id.to_string(), media_id.to_string());
        Ok(self.statuses.lock().unwrap().get(&key).copied())
    }

    async fn upsert_status(&self, update: &StatusUpdate) -> Result<(), ServiceError> {
        self.write(Call::Upsert(update.clone())).await
    }

    async fn remove_status(&self, user_id: &str, media_id: &str) -> Result<(), ServiceError> {
        self.write(Call::Remove(user_id.to_string(), media_id.to_string()))
            .await
    }

    async fn list_collection(
        &self,
        user_id: &str,
        filter: &CollectionFilter,
    ) -> Result<Vec<CollectionEntry>, ServiceError> {
        let call = Call::ListCollection(user_id.to_string(), *filter);
        self.start(&call);
        self.finish(call);

        let mut entries: Vec<CollectionEntry> = self
            .statuses
            .lock()
            .unwrap()
            .iter()
            .filter(|((user, _), status)| {
                user == user_id && filter.status.is_none_or(|wanted| wanted == **status)
            })
            .map(|((_, media_id), status)| CollectionEntry {
                media_id: media_id.clone(),
                status: *status,
                media_type: None,
                title: None,
                updated_at: None,
            })
            .collect();
        entries.sort_by(|a, b| a.media_id.cmp(&b.media_id));

        Ok(entries
            .into_iter()
            .skip(filter.offset() as usize)
            .take(filter.size as usize)
            .collect())
    }
}
