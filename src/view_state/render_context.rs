//! Read-only data handed to the UI for one frame.

use crate::models::{Complaint, Department, Translation, User};

use super::ViewState;

/// Request count for one department, used by the admin chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepartmentVolume {
    pub department: Department,
    pub count: u64,
}

/// Borrowed view of the app for rendering.
///
/// UI code depends on this instead of `App`, so a screen is a pure function
/// of `(ViewState, current user, complaint snapshot)`.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub state: &'a ViewState,
    pub current_user: Option<&'a User>,
    /// Every stored complaint, oldest first
    pub complaints: &'a [Complaint],
}

impl<'a> RenderContext<'a> {
    pub fn new(
        state: &'a ViewState,
        current_user: Option<&'a User>,
        complaints: &'a [Complaint],
    ) -> Self {
        Self {
            state,
            current_user,
            complaints,
        }
    }

    pub fn t(&self) -> &'static Translation {
        self.state.language.translation()
    }

    /// The current citizen's complaints, most recent first.
    pub fn my_complaints(&self) -> Vec<&'a Complaint> {
        match self.current_user {
            Some(user) => self
                .complaints
                .iter()
                .rev()
                .filter(|c| c.belongs_to(&user.id))
                .collect(),
            None => Vec::new(),
        }
    }

    /// All complaints, most recent first.
    pub fn all_complaints(&self) -> Vec<&'a Complaint> {
        self.complaints.iter().rev().collect()
    }

    pub fn department_volume(&self) -> Vec<DepartmentVolume> {
        department_volume(self.complaints)
    }
}

/// Count complaints per department, in [`Department::ALL`] order.
pub fn department_volume(complaints: &[Complaint]) -> Vec<DepartmentVolume> {
    Department::ALL
        .into_iter()
        .map(|department| DepartmentVolume {
            department,
            count: complaints
                .iter()
                .filter(|c| c.department == department)
                .count() as u64,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ComplaintStatus;

    fn complaint(id: &str, dept: Department, user: &str) -> Complaint {
        Complaint {
            id: id.to_string(),
            department: dept,
            service_type: dept.services()[0].to_string(),
            description: "d".to_string(),
            status: ComplaintStatus::Submitted,
            timestamp: "t".to_string(),
            user_id: user.to_string(),
            attachment_name: None,
        }
    }

    #[test]
    fn test_department_volume_counts_every_department() {
        let complaints = vec![
            complaint("1", Department::Municipal, "a"),
            complaint("2", Department::Municipal, "b"),
            complaint("3", Department::Electricity, "a"),
        ];
        let volume = department_volume(&complaints);
        assert_eq!(
            volume.iter().map(|v| v.count).collect::<Vec<_>>(),
            vec![1, 0, 2]
        );
    }

    #[test]
    fn test_my_complaints_newest_first() {
        let state = ViewState::default();
        let user = User::citizen("a", "9876543210");
        let complaints = vec![
            complaint("1", Department::Gas, "a"),
            complaint("2", Department::Gas, "b"),
            complaint("3", Department::Gas, "a"),
        ];
        let ctx = RenderContext::new(&state, Some(&user), &complaints);
        let ids: Vec<_> = ctx.my_complaints().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1"]);
        assert_eq!(ctx.all_complaints().len(), 3);
    }

    #[test]
    fn test_my_complaints_without_user_is_empty() {
        let state = ViewState::default();
        let complaints = vec![complaint("1", Department::Gas, "a")];
        let ctx = RenderContext::new(&state, None, &complaints);
        assert!(ctx.my_complaints().is_empty());
    }
}
