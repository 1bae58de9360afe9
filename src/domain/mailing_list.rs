//! Mailing list: e-mail addresses grouped under named labels

use crate::error::Result;
use crate::infrastructure::mailer::{Headers, MailSender};
use log::debug;
use std::collections::{BTreeSet, HashMap, HashSet};

/// Maps e-mail addresses to the groups they belong to.
///
/// Addresses are opaque strings; no syntax validation is performed.
#[derive(Debug, Clone, Default)]
pub struct MailingList {
    email_map: HashMap<String, HashSet<String>>,
}

impl MailingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `email` to `group`, creating the address entry if needed
    pub fn add_to_group(&mut self, email: impl Into<String>, group: impl Into<String>) {
        let email = email.into();
        let group = group.into();
        debug!("mailing list: {} joins {}", email, group);
        self.email_map.entry(email).or_default().insert(group);
    }

    /// Addresses belonging to at least one of `groups`.
    ///
    /// An empty `groups` slice matches nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use memomail::domain::MailingList;
    ///
    /// let mut list = MailingList::new();
    /// list.add_to_group("a@example.com", "friends");
    /// list.add_to_group("b@example.com", "family");
    /// let emails = list.emails_in_groups(&["friends", "family"]);
    /// assert_eq!(emails.len(), 2);
    /// assert!(list.emails_in_groups::<&str>(&[]).is_empty());
    /// ```
    pub fn emails_in_groups<S: AsRef<str>>(&self, groups: &[S]) -> BTreeSet<String> {
        self.email_map
            .iter()
            .filter(|(_, member_of)| groups.iter().any(|g| member_of.contains(g.as_ref())))
            .map(|(email, _)| email.clone())
            .collect()
    }

    /// Resolve `groups` and hand the mailing to `sender`.
    ///
    /// The sender is always invoked, even with no recipients. Its error is
    /// returned as-is.
    pub fn send_mailing<S: AsRef<str>>(
        &self,
        sender: &mut dyn MailSender,
        subject: &str,
        message: &str,
        from_addr: &str,
        groups: &[S],
        headers: Option<&Headers>,
    ) -> Result<usize> {
        let recipients: Vec<String> = self.emails_in_groups(groups).into_iter().collect();
        debug!(
            "mailing '{}' from {} to {} recipient(s)",
            subject,
            from_addr,
            recipients.len()
        );
        sender.send(subject, message, from_addr, &recipients, headers)?;
        Ok(recipients.len())
    }

    /// Groups of `email`, sorted, or `None` for an unknown address
    pub fn groups_for(&self, email: &str) -> Option<BTreeSet<&str>> {
        self.email_map
            .get(email)
            .map(|groups| groups.iter().map(String::as_str).collect())
    }

    /// All known addresses, sorted
    pub fn addresses(&self) -> BTreeSet<&str> {
        self.email_map.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.email_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.email_map.is_empty()
    }
}
