//! Application routes (page paths, not API endpoints).

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    SignIn,
    SignUp,
    Main,
    MyPage,
    MyExperiences,
    MyExperiencesDelete,
    MyExperiencesEdit,
    MyInfo,
    MyReservations,
    MyReservationsStatus,
}

impl Route {
    pub const ALL: [Route; 10] = [
        Route::SignIn,
        Route::SignUp,
        Route::Main,
        Route::MyPage,
        Route::MyExperiences,
        Route::MyExperiencesDelete,
        Route::MyExperiencesEdit,
        Route::MyInfo,
        Route::MyReservations,
        Route::MyReservationsStatus,
    ];

    pub const fn path(self) -> &'static str {
        match self {
            Route::SignIn => "/signin",
            Route::SignUp => "/signup",
            Route::Main => "/",
            Route::MyPage => "/mypage",
            Route::MyExperiences => "/mypage/experiences",
            Route::MyExperiencesDelete => "/mypage/experiences/delete",
            Route::MyExperiencesEdit => "/mypage/experiences/edit",
            Route::MyInfo => "/mypage/info",
            Route::MyReservations => "/mypage/reservations",
            Route::MyReservationsStatus => "/mypage/reservations-status",
        }
    }

    /// Whether the route sits under the signed-in user's page.
    pub fn is_my_page(self) -> bool {
        self.path().starts_with(Route::MyPage.path())
    }
}
