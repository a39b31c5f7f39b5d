mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod courses;
pub use courses::Courses;

mod course_details;
pub use course_details::CourseDetails;

mod dashboard;
pub use dashboard::{AllCourses, CourseViewer, DashboardHome, MyCourses, Profile, UserSettings};

mod admin;
pub use admin::{AdminDashboard, AdminSettings, EditUser, ManageCourses, ManageUsers};

use session::Role;

use crate::Route;

/// Where a fresh login lands. A role outside the known pair goes nowhere:
/// the caller shows "Unauthorized role." instead of navigating.
pub(crate) fn destination_for(role: &Role) -> Option<Route> {
    match role {
        Role::Admin => Some(Route::AdminDashboard {}),
        Role::User => Some(Route::DashboardHome {}),
        Role::Unknown => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_lands_on_the_admin_root() {
        assert_eq!(
            destination_for(&Role::Admin),
            Some(Route::AdminDashboard {})
        );
    }

    #[test]
    fn student_lands_on_the_dashboard_root() {
        assert_eq!(destination_for(&Role::User), Some(Route::DashboardHome {}));
    }

    #[test]
    fn unknown_role_has_no_destination() {
        assert_eq!(destination_for(&Role::Unknown), None);
    }
}
