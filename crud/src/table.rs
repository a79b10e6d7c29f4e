use crate::domain::{UserId, UserRecord};
use crate::labels::Locale;
use crate::location::PageLocation;

/// One rendered line of the `#users_show` table body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    /// 1-based position in the received list.
    pub number: usize,
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub role_label: &'static str,
    pub status_label: &'static str,
    pub edit_href: String,
    pub edit_label: &'static str,
    pub delete_label: &'static str,
}

impl UserRow {
    pub fn from_record(
        number: usize,
        record: &UserRecord,
        locale: Locale,
        location: &PageLocation,
    ) -> Self {
        Self {
            number,
            id: record.id,
            username: record.username.clone(),
            email: record.email.clone(),
            role_label: locale.role_label(record.is_admin()),
            status_label: locale.status_label(record.is_active()),
            edit_href: location.edit_url(record.id),
            edit_label: locale.edit_label(),
            delete_label: locale.delete_label(),
        }
    }

    /// Pipe-separated cells, handy for logs.
    pub fn summary(&self) -> String {
        format!(
            "{} | {} | {} | {} | {}",
            self.number, self.username, self.email, self.role_label, self.status_label
        )
    }
}

/// Rows for a freshly received list, in received order.
pub fn build_rows(records: &[UserRecord], locale: Locale, location: &PageLocation) -> Vec<UserRow> {
    tracing::debug!("Building {} user rows", records.len());
    records
        .iter()
        .enumerate()
        .map(|(n, record)| UserRow::from_record(n + 1, record, locale, location))
        .collect()
}
