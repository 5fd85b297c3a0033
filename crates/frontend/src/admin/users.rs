use crate::shared::components::ui::{Card, CardContent, CardHeader, CardTitle};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Placeholder page; user management has not shipped yet.
#[component]
pub fn UsersPage() -> impl IntoView {
    view! {
        <div class="admin-page">
            <div class="admin-page__header">
                <div>
                    <h2 class="admin-page__title">"Users Management"</h2>
                    <p class="admin-page__subtitle">"User management features coming soon"</p>
                </div>
            </div>

            <Card class="coming-soon-card">
                <CardContent>
                    <div class="coming-soon-card__body">
                        <span class="coming-soon-card__icon">{icon("users")}</span>
                        <h3>"Coming Soon"</h3>
                        <p>
                            "We're working hard to bring you comprehensive user management \
                             features. This section will include user registration, role \
                             management, and account administration."
                        </p>
                        <div class="coming-soon-card__eta">
                            {icon("clock")}
                            <span>"Expected release: Q2 2024"</span>
                        </div>
                    </div>
                </CardContent>
            </Card>

            <div class="preview-grid">
                <Card>
                    <CardHeader>
                        <CardTitle>{icon("users")} " User Registration"</CardTitle>
                    </CardHeader>
                    <CardContent>
                        <p>"Manage user accounts, registration process, and account verification."</p>
                    </CardContent>
                </Card>
                <Card>
                    <CardHeader>
                        <CardTitle>{icon("lock")} " Role Management"</CardTitle>
                    </CardHeader>
                    <CardContent>
                        <p>"Assign and manage user roles, permissions, and access levels."</p>
                    </CardContent>
                </Card>
                <Card>
                    <CardHeader>
                        <CardTitle>{icon("trending-up")} " User Analytics"</CardTitle>
                    </CardHeader>
                    <CardContent>
                        <p>"Track user activity, engagement metrics, and user behavior insights."</p>
                    </CardContent>
                </Card>
            </div>
        </div>
    }
}
