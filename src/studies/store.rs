//! Word Study Store
//!
//! Process-local record table. Ids are allocated from an atomic counter;
//! listing returns records in id order so the API output is stable.

use std::sync::atomic::{AtomicU32, Ordering};

use dashmap::DashMap;

use crate::studies::types::{now_ms, CreateStudyRequest, UpdateStudyRequest, WordStudy};

pub struct WordStudyStore {
    studies: DashMap<u32, WordStudy>,
    next_id: AtomicU32,
}

impl WordStudyStore {
    pub fn new() -> Self {
        Self {
            studies: DashMap::new(),
            next_id: AtomicU32::new(1),
        }
    }

    pub fn list(&self) -> Vec<WordStudy> {
        let mut studies: Vec<WordStudy> = self
            .studies
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        studies.sort_by_key(|study| study.id);
        studies
    }

    pub fn create(&self, req: CreateStudyRequest) -> WordStudy {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let now = now_ms();
        let study = WordStudy {
            id,
            strongs_number: req.strongs_number,
            title: req.title,
            notes: req.notes,
            created_at: now,
            updated_at: now,
        };
        self.studies.insert(id, study.clone());
        study
    }

    pub fn update(&self, id: u32, req: UpdateStudyRequest) -> Option<WordStudy> {
        let mut entry = self.studies.get_mut(&id)?;
        let study = entry.value_mut();

        if let Some(strongs_number) = req.strongs_number {
            study.strongs_number = strongs_number;
        }
        if let Some(title) = req.title {
            study.title = title;
        }
        if let Some(notes) = req.notes {
            study.notes = notes;
        }
        study.updated_at = now_ms();

        Some(study.clone())
    }

    pub fn delete(&self, id: u32) -> bool {
        self.studies.remove(&id).is_some()
    }
}

impl Default for WordStudyStore {
    fn default() -> Self {
        Self::new()
    }
}
