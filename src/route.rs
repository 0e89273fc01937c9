#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    People { slug: Option<String> },
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Routed {
    Page(Route),
    /// Show the target and replace the current URL with it.
    Redirect(Route),
}

impl Route {
    pub fn person(slug: &str) -> Self {
        Route::People { slug: Some(slug.to_string()) }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::People { slug: None } => "/people".to_string(),
            Route::People { slug: Some(slug) } => format!("/people/{slug}"),
            Route::NotFound => "/not-found".to_string(),
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.path())
    }
}

pub fn route(path: &str) -> Routed {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match segments.as_slice() {
        [] => Routed::Page(Route::Home),
        [home] if home.eq_ignore_ascii_case("home") => Routed::Redirect(Route::Home),
        [people] if people.eq_ignore_ascii_case("people") => {
            Routed::Page(Route::People { slug: None })
        }
        [people, slug] if people.eq_ignore_ascii_case("people") => Routed::Page(Route::person(slug)),
        _ => Routed::Page(Route::NotFound),
    }
}

/// "#/people/x" -> "/people/x"; an empty fragment is the root.
pub fn path_from_hash(hash: &str) -> String {
    let path = hash.trim_start_matches('#');
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}
