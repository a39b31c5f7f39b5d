use dioxus::prelude::*;

use ui::AuthProvider;

use layouts::{AdminShell, UserShell};
use views::{
    AdminDashboard, AdminSettings, AllCourses, CourseDetails, CourseViewer, Courses,
    DashboardHome, EditUser, Home, Login, ManageCourses, ManageUsers, MyCourses, Profile,
    Register, UserSettings,
};

mod layouts;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/courses")]
    Courses {},
    #[route("/courses/:id")]
    CourseDetails { id: u64 },

    // Student dashboard (role: user)
    #[layout(UserShell)]
        #[route("/dashboard")]
        DashboardHome {},
        #[route("/dashboard/profile")]
        Profile {},
        #[route("/dashboard/all-courses")]
        AllCourses {},
        #[route("/dashboard/my-courses")]
        MyCourses {},
        #[route("/dashboard/courses/:id")]
        CourseViewer { id: u64 },
        #[route("/dashboard/settings")]
        UserSettings {},
    #[end_layout]

    // Admin dashboard (role: admin)
    #[layout(AdminShell)]
        #[route("/admin")]
        AdminDashboard {},
        #[route("/admin/courses")]
        ManageCourses {},
        #[route("/admin/users")]
        ManageUsers {},
        #[route("/admin/users/:id/edit")]
        EditUser { id: u64 },
        #[route("/admin/settings")]
        AdminSettings {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}
