use std::collections::HashSet;

use super::Course;

/// Enrollment as a derived view over two independently fetched lists.
///
/// Built from the "my courses" response and joined to the full catalog by
/// course id, instead of mutating either list in place.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EnrollmentSet {
    ids: HashSet<u64>,
}

impl EnrollmentSet {
    pub fn from_courses(courses: &[Course]) -> Self {
        Self {
            ids: courses.iter().map(|course| course.id).collect(),
        }
    }

    pub fn contains(&self, course_id: u64) -> bool {
        self.ids.contains(&course_id)
    }

    /// Record a just-completed enrollment without a re-fetch.
    pub fn insert(&mut self, course_id: u64) {
        self.ids.insert(course_id);
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Drop the course with the given id from a list, leaving the rest.
pub fn remove_by_id(courses: &mut Vec<Course>, course_id: u64) {
    courses.retain(|course| course.id != course_id);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(id: u64, title: &str) -> Course {
        serde_json::from_str(&format!(
            r#"{{"id":{id},"title":"{title}","description":"","price":"0"}}"#
        ))
        .unwrap()
    }

    #[test]
    fn join_marks_exactly_the_enrolled_ids() {
        let mine = vec![course(2, "B"), course(5, "E")];
        let enrolled = EnrollmentSet::from_courses(&mine);

        let catalog = vec![course(1, "A"), course(2, "B"), course(5, "E")];
        let marked: Vec<u64> = catalog
            .iter()
            .filter(|c| enrolled.contains(c.id))
            .map(|c| c.id)
            .collect();
        assert_eq!(marked, vec![2, 5]);
        assert_eq!(enrolled.len(), 2);
    }

    #[test]
    fn insert_flips_membership_without_a_refetch() {
        let mut enrolled = EnrollmentSet::from_courses(&[]);
        assert!(enrolled.is_empty());
        assert!(!enrolled.contains(7));

        enrolled.insert(7);
        assert!(enrolled.contains(7));
    }

    #[test]
    fn remove_by_id_removes_exactly_the_target() {
        let mut mine = vec![course(1, "A"), course(2, "B"), course(3, "C")];
        remove_by_id(&mut mine, 2);

        let remaining: Vec<u64> = mine.iter().map(|c| c.id).collect();
        assert_eq!(remaining, vec![1, 3]);

        // Removing an absent id leaves the list untouched.
        remove_by_id(&mut mine, 99);
        assert_eq!(mine.len(), 2);
    }
}
