//! Text rendering for the user screen.

use crate::api::User;
use crate::remote::RemoteResult;

/// Lines shown for a user lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserView {
    pub name: String,
    pub age: String,
}

/// Render the current user state.
pub fn render_user(state: &RemoteResult<User>) -> UserView {
    UserView {
        name: state.as_ref().fold(
            |_| "Name: loading...".to_string(),
            |user| format!("Name: {}", user.name),
            |_| "Name: error!!!".to_string(),
        ),
        age: state.as_ref().fold(
            |_| "Age: loading...".to_string(),
            |user| format!("Age: {}", user.age),
            |_| "Age: error!!!".to_string(),
        ),
    }
}

impl std::fmt::Display for UserView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} | {}", self.name, self.age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::RemoteError;

    fn zhang_san() -> User {
        User::new("101", "张三", 23)
    }

    #[test]
    fn loading_hides_retained_value() {
        let view = render_user(&RemoteResult::loading(Some(zhang_san())));
        assert_eq!(view.name, "Name: loading...");
        assert_eq!(view.age, "Age: loading...");
    }

    #[test]
    fn success_shows_user() {
        let view = render_user(&RemoteResult::success(zhang_san()));
        assert_eq!(view.name, "Name: 张三");
        assert_eq!(view.age, "Age: 23");
        assert_eq!(view.to_string(), "Name: 张三 | Age: 23");
    }

    #[test]
    fn failure_shows_error() {
        let view = render_user(&RemoteResult::failure(RemoteError::not_found()));
        assert_eq!(view.name, "Name: error!!!");
        assert_eq!(view.age, "Age: error!!!");
    }
}
