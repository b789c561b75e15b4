//! Name and time filters applied to discovered entries

use std::time::SystemTime;

use glob::Pattern;

use crate::error::ConfigError;

use super::config::ListConfig;

/// Compile `-I` patterns, rejecting the first one that is not a valid glob.
pub fn compile_patterns(patterns: &[String]) -> Result<Vec<Pattern>, ConfigError> {
    patterns
        .iter()
        .map(|p| {
            Pattern::new(p).map_err(|e| ConfigError::InvalidPattern {
                pattern: p.clone(),
                reason: e.msg.to_string(),
            })
        })
        .collect()
}

/// Check if a basename matches any ignore pattern.
pub fn is_ignored(name: &[u8], patterns: &[Pattern]) -> bool {
    if patterns.is_empty() {
        return false;
    }
    let name = String::from_utf8_lossy(name);
    patterns.iter().any(|p| p.matches(&name))
}

/// Check a modification time against the `--newer`/`--older` window.
pub fn passes_time_filter(modified: Option<SystemTime>, config: &ListConfig) -> bool {
    // If we can't get mtime, include the file
    let Some(mtime) = modified else {
        return true;
    };

    if let Some(newer) = config.newer_than {
        if mtime < newer {
            return false;
        }
    }

    if let Some(older) = config.older_than {
        if mtime > older {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn patterns(raw: &[&str]) -> Vec<Pattern> {
        let owned: Vec<String> = raw.iter().map(|s| s.to_string()).collect();
        compile_patterns(&owned).unwrap()
    }

    #[test]
    fn test_is_ignored() {
        let p = patterns(&["*.log", "target", "tmp?"]);
        assert!(is_ignored(b"debug.log", &p));
        assert!(is_ignored(b"target", &p));
        assert!(is_ignored(b"tmp1", &p));
        assert!(!is_ignored(b"tmp12", &p));
        assert!(!is_ignored(b"main.rs", &p));
        assert!(!is_ignored(b"anything", &[]));
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let err = compile_patterns(&["[unclosed".to_string()]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPattern { ref pattern, .. } if pattern == "[unclosed"));
    }

    #[test]
    fn test_time_window() {
        let now = SystemTime::now();
        let hour_ago = now - Duration::from_secs(3600);
        let day_ago = now - Duration::from_secs(86_400);

        let config = ListConfig {
            newer_than: Some(now - Duration::from_secs(7200)),
            ..Default::default()
        };
        assert!(passes_time_filter(Some(hour_ago), &config));
        assert!(!passes_time_filter(Some(day_ago), &config));
        assert!(passes_time_filter(None, &config));

        let config = ListConfig {
            older_than: Some(now - Duration::from_secs(7200)),
            ..Default::default()
        };
        assert!(!passes_time_filter(Some(hour_ago), &config));
        assert!(passes_time_filter(Some(day_ago), &config));
    }
}
