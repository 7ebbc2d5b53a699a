use super::data_storage::{DataStorage, TODOS_FILE_NAME};
use super::error::Result;
use super::messages::Message;
use crate::{msg_debug, msg_error, msg_info};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub description: String,
    pub completed: bool,
    pub created_at: DateTime<Local>,
}

impl Task {
    pub fn new(id: u32, description: &str, created_at: DateTime<Local>) -> Self {
        Task {
            id,
            description: description.to_string(),
            completed: false,
            created_at,
        }
    }
}

/// The ordered task list backed by `todos.json`.
///
/// Ids come from a counter set once on load, so deleting the newest task and
/// adding another in the same session never hands out the old id again.
#[derive(Debug)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u32,
    storage: DataStorage,
}

impl TaskStore {
    /// Loads the task list, falling back to an empty one when the file is
    /// missing or unreadable. Problems are reported, never returned.
    pub fn load(storage: &DataStorage) -> Self {
        let file_path = storage.path(TODOS_FILE_NAME);
        let tasks = match Self::read(&file_path) {
            Ok(Some(tasks)) => {
                msg_debug!(Message::TodosLoaded(tasks.len(), file_path.display().to_string()));
                tasks
            }
            Ok(None) => {
                msg_info!(Message::TodosStartingFresh);
                Vec::new()
            }
            Err(e) => {
                msg_error!(Message::TodosLoadFailed(e.to_string()));
                Vec::new()
            }
        };

        Self::with_tasks(storage, tasks)
    }

    /// Builds a store around an already loaded list without reading the disk.
    pub fn with_tasks(storage: &DataStorage, tasks: Vec<Task>) -> Self {
        let next_id = tasks.iter().map(|t| t.id).max().map_or(1, |id| id.saturating_add(1));
        Self {
            tasks,
            next_id,
            storage: storage.clone(),
        }
    }

    /// `Ok(None)` when there is no file yet.
    fn read(file_path: &Path) -> Result<Option<Vec<Task>>> {
        let data = match fs::read_to_string(file_path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let tasks: Vec<Task> = serde_json::from_str(&data)?;
        Ok(Some(tasks))
    }

    /// Rewrites the whole file with the current list.
    pub fn save(&self) -> Result<()> {
        let file_path = self.storage.get_path(TODOS_FILE_NAME)?;
        let file = File::create(file_path)?;
        serde_json::to_writer_pretty(&file, &self.tasks)?;
        Ok(())
    }

    /// Saves and reports a failure instead of returning it; the in-memory
    /// change stands either way.
    fn persist(&self) {
        if let Err(e) = self.save() {
            msg_error!(Message::TodosSaveFailed(e.to_string()));
        }
    }

    pub fn add(&mut self, description: &str, now: DateTime<Local>) -> &Task {
        let task = Task::new(self.next_id, description, now);
        self.next_id = self.next_id.saturating_add(1);
        self.tasks.push(task);
        self.persist();

        &self.tasks[self.tasks.len() - 1]
    }

    /// Tasks in stored order.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn get(&self, id: u32) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    /// Marks the first task with `id` as completed. `None` leaves the store untouched.
    pub fn complete(&mut self, id: u32) -> Option<Task> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        task.completed = true;
        let task = task.clone();
        self.persist();

        Some(task)
    }

    /// Removes the first task with `id`, keeping the rest in order.
    pub fn delete(&mut self, id: u32) -> Option<Task> {
        let index = self.tasks.iter().position(|t| t.id == id)?;
        let task = self.tasks.remove(index);
        self.persist();

        Some(task)
    }
}
