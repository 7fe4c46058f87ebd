//! Named route table shared by dispatch and reversal.
//!
//! Every resource follows the same five-operation shape:
//!
//! ```text
//! /R/            list
//! /R/create/     create
//! /R/<key>/          detail
//! /R/<key>/update/   update
//! /R/<key>/delete/   delete
//! ```
//!
//! Slug-keyed resources use `<slug>`; id-keyed resources (time slots,
//! licenses, medical certificates) use `<id>`. Player routes are scoped
//! under the owning user's namespace: `/<username>/player/...`.
//!
//! Handlers are mounted from this table ([`pattern`]) and paths are rebuilt
//! from it ([`reverse`]), so dispatch and reversal cannot drift apart.

use uuid::Uuid;

/// Errors returned by [`reverse`] and [`pattern`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// No route is registered under the requested name.
    #[error("unknown route '{name}'")]
    UnknownRoute { name: String },

    /// The route needs a parameter the caller did not supply.
    #[error("route '{route}' requires parameter '{param}'")]
    MissingParam {
        route: &'static str,
        param: &'static str,
    },
}

struct Route {
    name: &'static str,
    pattern: &'static str,
}

/// Route table, ordered for dispatch.
///
/// Fixed-prefix resources come first: the player routes start with a
/// `{username}` wildcard segment and must be mounted last so they cannot
/// shadow `/category/...` and friends.
const ROUTES: &[Route] = &[
    Route { name: "category-list", pattern: "/category/" },
    Route { name: "category-create", pattern: "/category/create/" },
    Route { name: "category-detail", pattern: "/category/{slug}/" },
    Route { name: "category-update", pattern: "/category/{slug}/update/" },
    Route { name: "category-delete", pattern: "/category/{slug}/delete/" },
    Route { name: "gymnasium-list", pattern: "/gymnasium/" },
    Route { name: "gymnasium-create", pattern: "/gymnasium/create/" },
    Route { name: "gymnasium-detail", pattern: "/gymnasium/{slug}/" },
    Route { name: "gymnasium-update", pattern: "/gymnasium/{slug}/update/" },
    Route { name: "gymnasium-delete", pattern: "/gymnasium/{slug}/delete/" },
    Route { name: "team-list", pattern: "/team/" },
    Route { name: "team-create", pattern: "/team/create/" },
    Route { name: "team-detail", pattern: "/team/{slug}/" },
    Route { name: "team-update", pattern: "/team/{slug}/update/" },
    Route { name: "team-delete", pattern: "/team/{slug}/delete/" },
    Route { name: "time-slot-list", pattern: "/time-slot/" },
    Route { name: "time-slot-create", pattern: "/time-slot/create/" },
    Route { name: "time-slot-detail", pattern: "/time-slot/{id}/" },
    Route { name: "time-slot-update", pattern: "/time-slot/{id}/update/" },
    Route { name: "time-slot-delete", pattern: "/time-slot/{id}/delete/" },
    Route { name: "license-list", pattern: "/license/" },
    Route { name: "license-create", pattern: "/license/create/" },
    Route { name: "license-detail", pattern: "/license/{id}/" },
    Route { name: "license-update", pattern: "/license/{id}/update/" },
    Route { name: "license-delete", pattern: "/license/{id}/delete/" },
    Route { name: "medical-certificate-list", pattern: "/medical-certificate/" },
    Route { name: "medical-certificate-create", pattern: "/medical-certificate/create/" },
    Route { name: "medical-certificate-detail", pattern: "/medical-certificate/{id}/" },
    Route { name: "medical-certificate-update", pattern: "/medical-certificate/{id}/update/" },
    Route { name: "medical-certificate-delete", pattern: "/medical-certificate/{id}/delete/" },
    Route { name: "player-list", pattern: "/{username}/player/" },
    Route { name: "player-create", pattern: "/{username}/player/create/" },
    Route { name: "player-detail", pattern: "/{username}/player/{slug}/" },
    Route { name: "player-update", pattern: "/{username}/player/{slug}/update/" },
    Route { name: "player-delete", pattern: "/{username}/player/{slug}/delete/" },
];

/// Parameters available when reversing a route.
#[derive(Debug, Clone, Default)]
pub struct RouteParams<'a> {
    username: Option<&'a str>,
    slug: Option<&'a str>,
    id: Option<Uuid>,
}

impl<'a> RouteParams<'a> {
    /// No parameters; suits list and create routes.
    pub fn none() -> Self {
        Self::default()
    }

    /// Parameters for slug-keyed routes.
    pub fn slug(slug: &'a str) -> Self {
        Self {
            slug: Some(slug),
            ..Self::default()
        }
    }

    /// Parameters for id-keyed routes.
    pub fn id(id: Uuid) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    /// Parameters for username-scoped list and create routes.
    pub fn username(username: &'a str) -> Self {
        Self {
            username: Some(username),
            ..Self::default()
        }
    }

    /// Parameters for username-scoped, slug-keyed routes.
    pub fn username_slug(username: &'a str, slug: &'a str) -> Self {
        Self {
            username: Some(username),
            slug: Some(slug),
            ..Self::default()
        }
    }
}

fn find(name: &str) -> Result<&'static Route, RouteError> {
    ROUTES
        .iter()
        .find(|r| r.name == name)
        .ok_or_else(|| RouteError::UnknownRoute {
            name: name.to_owned(),
        })
}

/// Look up the mount pattern for a named route.
///
/// # Errors
/// Returns [`RouteError::UnknownRoute`] for unregistered names.
pub fn pattern(name: &str) -> Result<&'static str, RouteError> {
    find(name).map(|r| r.pattern)
}

/// Look up the mount pattern for a route named by a compile-time constant.
///
/// # Panics
/// Panics on unregistered names; mount sites pass literals checked by the
/// route-table tests.
pub fn mount(name: &'static str) -> &'static str {
    pattern(name).unwrap_or_else(|err| panic!("route table misconfigured: {err}"))
}

/// Rebuild the concrete path for a named route from its parameters.
///
/// # Errors
/// Returns [`RouteError::UnknownRoute`] for unregistered names and
/// [`RouteError::MissingParam`] when the pattern references a parameter the
/// caller did not supply.
///
/// # Examples
/// ```
/// use sports_manager::inbound::http::routes::{reverse, RouteParams};
///
/// let path = reverse("category-detail", &RouteParams::slug("hello-world")).expect("path");
/// assert_eq!(path, "/category/hello-world/");
/// ```
pub fn reverse(name: &str, params: &RouteParams<'_>) -> Result<String, RouteError> {
    let route = find(name)?;
    let id_string = params.id.map(|id| id.to_string());
    let mut path = String::with_capacity(route.pattern.len());
    for piece in route.pattern.split('/') {
        match piece {
            "" => continue,
            "{username}" => {
                let value = params.username.ok_or(RouteError::MissingParam {
                    route: route.name,
                    param: "username",
                })?;
                path.push('/');
                path.push_str(value);
            }
            "{slug}" => {
                let value = params.slug.ok_or(RouteError::MissingParam {
                    route: route.name,
                    param: "slug",
                })?;
                path.push('/');
                path.push_str(value);
            }
            "{id}" => {
                let value = id_string.as_deref().ok_or(RouteError::MissingParam {
                    route: route.name,
                    param: "id",
                })?;
                path.push('/');
                path.push_str(value);
            }
            literal => {
                path.push('/');
                path.push_str(literal);
            }
        }
    }
    path.push('/');
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("category-list", RouteParams::none(), "/category/")]
    #[case("category-create", RouteParams::none(), "/category/create/")]
    #[case("category-detail", RouteParams::slug("hello-world"), "/category/hello-world/")]
    #[case("gymnasium-update", RouteParams::slug("hello-world"), "/gymnasium/hello-world/update/")]
    #[case("gymnasium-delete", RouteParams::slug("hello-world"), "/gymnasium/hello-world/delete/")]
    #[case("player-list", RouteParams::username("toto"), "/toto/player/")]
    #[case(
        "player-detail",
        RouteParams::username_slug("toto", "hello-world"),
        "/toto/player/hello-world/"
    )]
    #[case(
        "player-update",
        RouteParams::username_slug("toto", "hello-world"),
        "/toto/player/hello-world/update/"
    )]
    fn reverse_rebuilds_the_documented_paths(
        #[case] name: &str,
        #[case] params: RouteParams<'_>,
        #[case] expected: &str,
    ) {
        assert_eq!(reverse(name, &params).expect("path"), expected);
    }

    #[rstest]
    fn reverse_rejects_unknown_names() {
        let err = reverse("club-list", &RouteParams::none()).expect_err("unknown");
        assert_eq!(
            err,
            RouteError::UnknownRoute {
                name: "club-list".to_owned()
            }
        );
    }

    #[rstest]
    #[case("category-detail", RouteParams::none(), "slug")]
    #[case("player-list", RouteParams::none(), "username")]
    #[case("player-detail", RouteParams::username("toto"), "slug")]
    #[case("time-slot-update", RouteParams::none(), "id")]
    fn reverse_reports_missing_parameters(
        #[case] name: &str,
        #[case] params: RouteParams<'_>,
        #[case] missing: &str,
    ) {
        match reverse(name, &params).expect_err("missing param") {
            RouteError::MissingParam { param, .. } => assert_eq!(param, missing),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[rstest]
    fn reverse_substitutes_ids() {
        let id = Uuid::nil();
        let path = reverse("time-slot-detail", &RouteParams::id(id)).expect("path");
        assert_eq!(path, format!("/time-slot/{id}/"));
    }

    #[rstest]
    fn every_route_name_is_unique() {
        for (i, route) in ROUTES.iter().enumerate() {
            assert!(
                ROUTES[i + 1..].iter().all(|r| r.name != route.name),
                "duplicate route name {}",
                route.name
            );
        }
    }

    #[rstest]
    fn player_routes_are_mounted_after_fixed_prefixes() {
        let first_player = ROUTES
            .iter()
            .position(|r| r.pattern.starts_with("/{username}"))
            .expect("player routes present");
        assert!(
            ROUTES[first_player..]
                .iter()
                .all(|r| r.pattern.starts_with("/{username}")),
            "wildcard-prefixed routes must come last"
        );
    }
}
