//! Document Category Tree
//!
//! Static two-level category hierarchy for the documents page, plus
//! breadcrumb derivation for the selected key.

/// Key for the pseudo-category matching everything
pub const ALL_KEY: &str = "all";

/// A node in the category tree (at most two levels deep)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryNode {
    pub key: &'static str,
    pub title: &'static str,
    pub children: &'static [CategoryNode],
}

/// Document categories shown in the sidebar tree
pub const CATEGORY_TREE: &[CategoryNode] = &[
    CategoryNode { key: ALL_KEY, title: "All", children: &[] },
    CategoryNode {
        key: "linux-devops",
        title: "Linux & DevOps",
        children: &[
            CategoryNode { key: "linux-os", title: "Linux OS", children: &[] },
            CategoryNode { key: "shell-script", title: "Shell Script", children: &[] },
            CategoryNode { key: "command-line", title: "Command Line", children: &[] },
            CategoryNode { key: "system-admin", title: "System Administration", children: &[] },
            CategoryNode { key: "network-admin", title: "Network Administration", children: &[] },
            CategoryNode { key: "security", title: "Security", children: &[] },
        ],
    },
    CategoryNode {
        key: "container",
        title: "Container & Orchestration",
        children: &[
            CategoryNode { key: "docker", title: "Docker", children: &[] },
            CategoryNode { key: "kubernetes", title: "Kubernetes", children: &[] },
            CategoryNode { key: "docker-compose", title: "Docker Compose", children: &[] },
            CategoryNode { key: "container-security", title: "Container Security", children: &[] },
        ],
    },
    CategoryNode {
        key: "cicd-vcs",
        title: "CI/CD & Version Control",
        children: &[
            CategoryNode { key: "git", title: "Git", children: &[] },
            CategoryNode { key: "github", title: "GitHub", children: &[] },
            CategoryNode { key: "gitlab-cicd", title: "GitLab CI/CD", children: &[] },
            CategoryNode { key: "jenkins", title: "Jenkins", children: &[] },
            CategoryNode { key: "github-actions", title: "GitHub Actions", children: &[] },
        ],
    },
    CategoryNode {
        key: "programming",
        title: "Programming",
        children: &[
            CategoryNode { key: "web", title: "Web Development", children: &[] },
            CategoryNode { key: "mobile", title: "Mobile Development", children: &[] },
            CategoryNode { key: "ai", title: "AI/ML", children: &[] },
            CategoryNode { key: "backend", title: "Backend", children: &[] },
            CategoryNode { key: "frontend", title: "Frontend", children: &[] },
        ],
    },
    CategoryNode {
        key: "database",
        title: "Databases",
        children: &[
            CategoryNode { key: "sql", title: "SQL", children: &[] },
            CategoryNode { key: "nosql", title: "NoSQL", children: &[] },
            CategoryNode { key: "data-modeling", title: "Data Modeling", children: &[] },
        ],
    },
    CategoryNode {
        key: "study",
        title: "Study Materials",
        children: &[
            CategoryNode { key: "slides", title: "Slides", children: &[] },
            CategoryNode { key: "exercises", title: "Exercises", children: &[] },
            CategoryNode { key: "exam-samples", title: "Sample Exams", children: &[] },
        ],
    },
];

/// Find a node (root or child) by key
pub fn find_node(key: &str) -> Option<&'static CategoryNode> {
    for root in CATEGORY_TREE {
        if root.key == key {
            return Some(root);
        }
        for child in root.children {
            if child.key == key {
                return Some(child);
            }
        }
    }
    None
}

/// Parent of a child key, None for roots and unknown keys
pub fn parent_of(key: &str) -> Option<&'static CategoryNode> {
    CATEGORY_TREE
        .iter()
        .find(|root| root.children.iter().any(|c| c.key == key))
}

/// The key itself plus all keys below it in the tree.
///
/// Used by the descendant-expanding category match mode; for a child key
/// this is just the key itself.
pub fn descendant_keys(key: &str) -> Vec<&'static str> {
    match find_node(key) {
        Some(node) => {
            let mut keys = vec![node.key];
            keys.extend(node.children.iter().map(|c| c.key));
            keys
        }
        None => Vec::new(),
    }
}

/// Breadcrumb titles for the selected key: empty for "all", one entry for
/// a root category, parent + child for a sub-category. Unknown keys yield
/// an empty trail.
pub fn breadcrumb_trail(key: &str) -> Vec<&'static str> {
    if key == ALL_KEY {
        return Vec::new();
    }
    if let Some(parent) = parent_of(key) {
        if let Some(node) = parent.children.iter().find(|c| c.key == key) {
            return vec![parent.title, node.title];
        }
    }
    match find_node(key) {
        Some(node) => vec![node.title],
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_node_root_and_child() {
        assert_eq!(find_node("container").map(|n| n.title), Some("Container & Orchestration"));
        assert_eq!(find_node("docker").map(|n| n.title), Some("Docker"));
        assert!(find_node("nope").is_none());
    }

    #[test]
    fn test_parent_of() {
        assert_eq!(parent_of("kubernetes").map(|n| n.key), Some("container"));
        assert!(parent_of("container").is_none());
        assert!(parent_of("nope").is_none());
    }

    #[test]
    fn test_descendant_keys_of_parent() {
        let keys = descendant_keys("container");
        assert_eq!(
            keys,
            vec!["container", "docker", "kubernetes", "docker-compose", "container-security"]
        );
    }

    #[test]
    fn test_descendant_keys_of_leaf_and_unknown() {
        assert_eq!(descendant_keys("git"), vec!["git"]);
        assert!(descendant_keys("nope").is_empty());
    }

    #[test]
    fn test_breadcrumb_trail() {
        assert!(breadcrumb_trail("all").is_empty());
        assert_eq!(breadcrumb_trail("database"), vec!["Databases"]);
        assert_eq!(breadcrumb_trail("docker"), vec!["Container & Orchestration", "Docker"]);
        assert!(breadcrumb_trail("nope").is_empty());
    }
}
