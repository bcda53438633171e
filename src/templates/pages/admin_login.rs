use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn admin_login_page(error: Option<&str>) -> Markup {
    desktop_layout(
        "Admin sign in",
        html! {
            main class="container narrow" {
                h1 { "Admin sign in" }
                @if let Some(error) = error {
                    div class="alert error" role="alert" { p { (error) } }
                }
                form method="post" action="/admin/login" {
                    label for="token" {
                        "Admin token"
                        input type="password" id="token" name="token" required autocomplete="current-password";
                    }
                    button type="submit" class="primary" { "Sign in" }
                }
            }
        },
    )
}
