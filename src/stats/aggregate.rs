use crate::model::{Role, StatEntry, UserStat, SERVICE_USER};
use std::collections::btree_map::{self, BTreeMap};

/// Per-user role and commit count, keyed by display name.
///
/// Collaborator logins and commit display names share the key space without
/// being reconciled, so one person may show up under two names. Entries are
/// never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserStats {
    users: BTreeMap<String, UserStat>,
}

pub fn role_for(login: &str, owner_login: &str) -> Role {
    if login == owner_login {
        Role::Owner
    } else {
        Role::Collaborator
    }
}

pub fn is_service_user(name: &str) -> bool {
    name == SERVICE_USER
}

impl UserStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a collaborator with a zero count, replacing any prior entry.
    pub fn insert_collaborator(&mut self, login: &str, role: Role) {
        self.users.insert(login.to_string(), UserStat::new(role));
    }

    /// Counts one commit for `name`, creating a `Contributor` if unseen.
    pub fn record_commit(&mut self, name: &str) -> &UserStat {
        let stat = self
            .users
            .entry(name.to_string())
            .or_insert_with(|| UserStat::new(Role::Contributor));
        stat.commit_count += 1;
        stat
    }

    pub fn get(&self, name: &str) -> Option<&UserStat> {
        self.users.get(name)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, UserStat> {
        self.users.iter()
    }

    /// Entries for the stats listing; the service user is left out.
    pub fn entries(&self) -> impl Iterator<Item = StatEntry> + '_ {
        self.users
            .iter()
            .filter(|(name, _)| !is_service_user(name))
            .map(|(name, stat)| StatEntry {
                name: name.clone(),
                role: stat.role,
                commit_count: stat.commit_count,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_login_gets_owner_role() {
        assert_eq!(role_for("alice", "alice"), Role::Owner);
        assert_eq!(role_for("bob", "alice"), Role::Collaborator);
        assert_eq!(role_for("Alice", "alice"), Role::Collaborator);
    }

    #[test]
    fn unseen_committer_becomes_contributor() {
        let mut stats = UserStats::new();
        stats.insert_collaborator("bob", Role::Collaborator);

        assert_eq!(stats.record_commit("bob").commit_count, 1);
        let carol = *stats.record_commit("carol");
        assert_eq!(carol.role, Role::Contributor);
        assert_eq!(carol.commit_count, 1);
        stats.record_commit("carol");
        assert_eq!(stats.get("carol").unwrap().commit_count, 2);
        assert_eq!(stats.len(), 2);
    }

    #[test]
    fn service_user_counted_but_not_listed() {
        let mut stats = UserStats::new();
        stats.record_commit("GitHub");
        stats.record_commit("dave");
        assert_eq!(stats.get("GitHub").unwrap().commit_count, 1);

        let names: Vec<_> = stats.entries().map(|e| e.name).collect();
        assert_eq!(names, vec!["dave".to_string()]);
    }

    #[test]
    fn reinserting_collaborator_resets_count() {
        let mut stats = UserStats::new();
        stats.insert_collaborator("bob", Role::Collaborator);
        stats.record_commit("bob");
        stats.insert_collaborator("bob", Role::Collaborator);
        assert_eq!(stats.get("bob").unwrap().commit_count, 0);
    }
}
