use super::*;

fn project(slug: &str, tags: &[&str]) -> Project {
    Project {
        id: slug.to_owned(),
        slug: slug.to_owned(),
        title: slug.to_owned(),
        description: String::new(),
        content: None,
        tags: tags.iter().map(|t| (*t).to_owned()).collect(),
        tech_stack: Vec::new(),
        live_url: None,
        repo_url: None,
        image_url: None,
        featured: false,
        published: true,
        order: 0,
        created_at: "2024-01-01T00:00:00Z".to_owned(),
        updated_at: "2024-01-01T00:00:00Z".to_owned(),
    }
}

#[test]
fn collect_tags_is_unique_and_sorted() {
    let projects = vec![
        project("a", &["rust", "wasm"]),
        project("b", &["api", "rust"]),
    ];
    assert_eq!(collect_tags(&projects), vec!["api", "rust", "wasm"]);
}

#[test]
fn collect_tags_of_untagged_projects_is_empty() {
    let projects = vec![project("a", &[])];
    assert!(collect_tags(&projects).is_empty());
}

#[test]
fn filter_by_tag_none_returns_everything() {
    let projects = vec![project("a", &["rust"]), project("b", &[])];
    assert_eq!(filter_by_tag(&projects, None).len(), 2);
}

#[test]
fn filter_by_tag_keeps_only_matching_projects() {
    let projects = vec![
        project("a", &["rust", "wasm"]),
        project("b", &["api"]),
        project("c", &["rust"]),
    ];
    let filtered = filter_by_tag(&projects, Some("rust"));
    let slugs: Vec<&str> = filtered.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, vec!["a", "c"]);
}

#[test]
fn filter_by_tag_with_unknown_tag_is_empty() {
    let projects = vec![project("a", &["rust"])];
    assert!(filter_by_tag(&projects, Some("cobol")).is_empty());
}
