//! Core data types: the [`Todo`] record and the ordered [`TodoList`].
//!
//! Every to-do carries an `id` assigned when it is created. Ids are allocated
//! as one past the highest id in the list, starting at zero, so a list that
//! only ever grew through `add` has ids matching positions.

use crate::error::{Result, TodoError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Absent in documents written before ids existed; filled in by [`TodoList::normalize`].
    #[serde(default)]
    pub id: Option<u64>,
    pub title: String,
    #[serde(default)]
    pub done: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Todo {
    pub fn new(id: u64, title: String, done: bool) -> Self {
        Self {
            id: Some(id),
            title,
            done,
            created_at: Some(Utc::now()),
        }
    }

    /// The stable id of this to-do. Lists are normalized on load, so every
    /// record reachable through a store has one.
    pub fn id(&self) -> u64 {
        self.id.unwrap_or_default()
    }
}

/// Insertion-ordered collection of to-dos. Serializes as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoList {
    todos: Vec<Todo>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_todos(todos: Vec<Todo>) -> Result<Self> {
        let mut list = Self { todos };
        list.normalize()?;
        Ok(list)
    }

    /// Gives every record a unique id. Records without one, and later
    /// records repeating an id already seen, get fresh ids in document order
    /// after every id already present. The first holder of an id keeps it.
    pub fn normalize(&mut self) -> Result<()> {
        let mut seen = HashSet::new();
        for todo in &mut self.todos {
            if let Some(id) = todo.id {
                if !seen.insert(id) {
                    todo.id = None;
                }
            }
        }

        if self.todos.iter().all(|t| t.id.is_some()) {
            return Ok(());
        }

        let mut next = Some(self.next_id()?);
        for todo in self.todos.iter_mut().filter(|t| t.id.is_none()) {
            let id = next.ok_or(TodoError::IdsExhausted(u64::MAX))?;
            todo.id = Some(id);
            next = id.checked_add(1);
        }
        Ok(())
    }

    /// One past the highest id, or zero for an empty list.
    pub fn next_id(&self) -> Result<u64> {
        match self.todos.iter().filter_map(|t| t.id).max() {
            None => Ok(0),
            Some(max) => max.checked_add(1).ok_or(TodoError::IdsExhausted(max)),
        }
    }

    /// Appends a new to-do and returns a reference to it.
    pub fn push(&mut self, title: String, done: bool) -> Result<&Todo> {
        let todo = Todo::new(self.next_id()?, title, done);
        self.todos.push(todo);
        Ok(&self.todos[self.todos.len() - 1])
    }

    pub fn get(&self, id: u64) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == Some(id))
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut Todo> {
        self.todos.iter_mut().find(|t| t.id == Some(id))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Todo> {
        self.todos.iter()
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn into_vec(self) -> Vec<Todo> {
        self.todos
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a Todo;
    type IntoIter = std::slice::Iter<'a, Todo>;

    fn into_iter(self) -> Self::IntoIter {
        self.todos.iter()
    }
}
