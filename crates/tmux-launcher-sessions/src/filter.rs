//! Query filtering.

use tmux_launcher_core::Session;

/// Narrow sessions down to those matching a query.
///
/// An absent or empty query keeps everything. Otherwise the query is
/// lowercased and matched as a plain substring of each session's search key.
/// Relative order is preserved.
pub fn filter_sessions(sessions: &[Session], query: Option<&str>) -> Vec<Session> {
    let needle = match query {
        Some(q) if !q.is_empty() => q.to_lowercase(),
        _ => return sessions.to_vec(),
    };

    sessions
        .iter()
        .filter(|session| session.matches(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sessions() -> Vec<Session> {
        vec![
            Session::new(None, "main", "vim", true),
            Session::new(None, "work", "bash", false),
            Session::new(Some("dev".to_string()), "api", "cargo run", true),
        ]
    }

    fn names(sessions: &[Session]) -> Vec<&str> {
        sessions.iter().map(|s| s.session_name()).collect()
    }

    #[test]
    fn test_no_query_returns_all() {
        let all = sessions();
        assert_eq!(filter_sessions(&all, None), all);
        assert_eq!(filter_sessions(&all, Some("")), all);
    }

    #[test]
    fn test_matches_title() {
        let all = sessions();
        assert_eq!(names(&filter_sessions(&all, Some("VIM"))), ["main"]);
    }

    #[test]
    fn test_matches_session_name() {
        let all = sessions();
        assert_eq!(names(&filter_sessions(&all, Some("wor"))), ["work"]);
    }

    #[test]
    fn test_matches_detached_marker() {
        let all = sessions();
        assert_eq!(names(&filter_sessions(&all, Some("detached"))), ["work"]);
    }

    #[test]
    fn test_no_match() {
        let all = sessions();
        assert!(filter_sessions(&all, Some("emacs")).is_empty());
    }

    #[test]
    fn test_order_preserved() {
        let all = sessions();
        assert_eq!(names(&filter_sessions(&all, Some("a"))), ["main", "work", "api"]);
    }
}
