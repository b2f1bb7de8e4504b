use crate::models::admin::{Admin, AdminId};
use crate::models::candidate::{Candidate, CandidateId};
use crate::models::company::{Company, CompanyId};
use crate::models::vacancy::{Vacancy, VacancyId};

/// Anything the store keeps in a `Collection`.
pub trait Record: Clone {
    type Id: Copy + Eq + std::fmt::Debug;

    fn id(&self) -> Self::Id;
}

impl Record for Company {
    type Id = CompanyId;

    fn id(&self) -> CompanyId {
        self.id
    }
}

impl Record for Admin {
    type Id = AdminId;

    fn id(&self) -> AdminId {
        self.id
    }
}

impl Record for Vacancy {
    type Id = VacancyId;

    fn id(&self) -> VacancyId {
        self.id
    }
}

impl Record for Candidate {
    type Id = CandidateId;

    fn id(&self) -> CandidateId {
        self.id
    }
}

/// Insertion-ordered rows with linear-scan lookups. Callers do their own
/// cross-collection filtering.
#[derive(Debug, Clone)]
pub struct Collection<T: Record> {
    rows: Vec<T>,
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<T: Record> Collection<T> {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn contains(&self, id: T::Id) -> bool {
        self.rows.iter().any(|row| row.id() == id)
    }

    /// Appends `row`; its id must already be unique in this collection.
    pub fn insert(&mut self, row: T) -> T {
        debug_assert!(!self.contains(row.id()), "duplicate id {:?}", row.id());
        self.rows.push(row.clone());
        row
    }

    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.rows.iter().find(|row| row.id() == id)
    }

    pub fn get_mut(&mut self, id: T::Id) -> Option<&mut T> {
        self.rows.iter_mut().find(|row| row.id() == id)
    }

    /// Applies `apply` to the row and returns the updated copy, or `None`.
    pub fn update<F>(&mut self, id: T::Id, apply: F) -> Option<T>
    where
        F: FnOnce(&mut T),
    {
        let row = self.get_mut(id)?;
        apply(row);
        Some(row.clone())
    }

    pub fn remove(&mut self, id: T::Id) -> Option<T> {
        let index = self.rows.iter().position(|row| row.id() == id)?;
        Some(self.rows.remove(index))
    }

    /// Removes every matching row and returns how many were dropped.
    pub fn remove_where<P>(&mut self, predicate: P) -> usize
    where
        P: Fn(&T) -> bool,
    {
        let before = self.rows.len();
        self.rows.retain(|row| !predicate(row));
        before - self.rows.len()
    }

    pub fn find<P>(&self, predicate: P) -> Option<&T>
    where
        P: Fn(&T) -> bool,
    {
        self.rows.iter().find(|row| predicate(row))
    }

    pub fn filter<P>(&self, predicate: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        self.rows.iter().filter(|row| predicate(row)).cloned().collect()
    }

    pub fn count_where<P>(&self, predicate: P) -> usize
    where
        P: Fn(&T) -> bool,
    {
        self.rows.iter().filter(|row| predicate(row)).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.rows.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.rows.iter_mut()
    }

    pub fn all(&self) -> Vec<T> {
        self.rows.clone()
    }
}
