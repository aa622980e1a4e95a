//! Plain-text rendering of the registered users.

use std::fmt::Write;

use crate::domain::User;

pub const REPORT_TITLE: &str = "Relatório de Usuários";
pub const EMPTY_NOTICE: &str = "Nenhum usuário cadastrado";

/// Renders the report for `users`, in the order given.
pub fn render<'a>(users: impl IntoIterator<Item = &'a User>) -> String {
    let mut report = format!("--- {} ---\n", REPORT_TITLE);
    let mut listed = 0;

    for user in users {
        let _ = writeln!(report, "Nome: {}, Status: {}", user.name, user.status);
        listed += 1;
    }

    if listed == 0 {
        report.push_str(EMPTY_NOTICE);
        report.push('\n');
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserStatus;

    fn user(name: &str, status: UserStatus) -> User {
        User {
            id: format!("id-{}", name),
            name: name.to_string(),
            email: format!("{}@email.com", name.to_lowercase()),
            age: 30,
            status,
            is_admin: false,
        }
    }

    #[test]
    fn test_empty_report_has_notice() {
        let report = render(std::iter::empty());
        assert_eq!(report, "--- Relatório de Usuários ---\nNenhum usuário cadastrado\n");
    }

    #[test]
    fn test_report_lists_users_in_order() {
        let users = [user("Alice", UserStatus::Active), user("Bob", UserStatus::Inactive)];
        let report = render(&users);

        assert_eq!(
            report,
            "--- Relatório de Usuários ---\nNome: Alice, Status: ativo\nNome: Bob, Status: inativo\n"
        );
        assert!(!report.contains(EMPTY_NOTICE));
    }
}
