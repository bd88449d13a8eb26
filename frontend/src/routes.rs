use yew_router::prelude::*;

/// Client-side route table: public marketing routes, auth routes, the
/// emailed booking-action routes, and the admin tree behind the auth gate.
#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/practice-areas")]
    PracticeAreas,
    #[at("/practice-areas/:slug")]
    PracticeAreaDetail { slug: String },
    #[at("/careers")]
    Careers,
    #[at("/contact")]
    Contact,
    #[at("/team/:slug")]
    TeamMemberDetail { slug: String },
    #[at("/login")]
    Login,
    #[at("/forgot-password")]
    ForgotPassword,
    #[at("/appointment/:action/:id")]
    BookingAction { action: String, id: u64 },
    #[at("/admin")]
    Admin,
    #[at("/admin/banners")]
    AdminBanners,
    #[at("/admin/practice-areas")]
    AdminPracticeAreas,
    #[at("/admin/team")]
    AdminTeam,
    #[at("/admin/vacancies")]
    AdminVacancies,
    #[at("/admin/messages")]
    AdminMessages,
    #[at("/admin/terms")]
    AdminTerms,
    #[at("/admin/bookings")]
    AdminBookings,
    #[at("/admin/settings")]
    AdminSettings,
    #[at("/admin/email-settings")]
    AdminEmailSettings,
    #[not_found]
    #[at("/404")]
    NotFound,
}
