//! Route tables and application composition.
//!
//! Each resource declares its own route table. Per-route middleware is attached to
//! the method router in a fixed order so that a request meets body validation first,
//! then authentication, then the role check. Layers are route layers, so a method
//! the path does not serve still gets a plain 405.

use axum::{
    middleware,
    routing::{delete, get, post, put, MethodRouter},
    Router,
};
use tower_http::trace::TraceLayer;
use tower_sessions::{service::SignedCookie, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::ErrorDto,
        booking::{BookingDto, CreateBookingDto, UpdateBookingDto},
        hotel::{CreateHotelDto, HotelDto, UpdateHotelDto},
        user::{CreateUserDto, LoginDto, Role, UpdateUserDto, UserDto},
    },
    server::{
        controller::{auth, booking, hotel, user},
        middleware::{
            auth::require_auth,
            roles::{require_roles, RoleRule},
            session::bearer_to_session_cookie,
            validation::{validate_body, BodySchema},
        },
        model::{
            booking::{CREATE_BOOKING_SCHEMA, UPDATE_BOOKING_SCHEMA},
            hotel::{CREATE_HOTEL_SCHEMA, UPDATE_HOTEL_SCHEMA},
            user::{CREATE_USER_SCHEMA, LOGIN_SCHEMA, UPDATE_USER_SCHEMA},
        },
        state::AppState,
    },
};

const ADMIN: RoleRule = RoleRule::new(&[Role::Admin]);
const ADMIN_OR_SELF: RoleRule = RoleRule::new(&[Role::Admin]).or_self();

#[derive(OpenApi)]
#[openapi(
    info(title = "Hotel Booking API"),
    paths(
        auth::signup,
        auth::login,
        auth::logout,
        user::get_users,
        user::get_user,
        user::create_user,
        user::update_user,
        user::delete_user,
        hotel::get_hotels,
        hotel::get_hotel,
        hotel::create_hotel,
        hotel::update_hotel,
        hotel::delete_hotel,
        booking::get_bookings,
        booking::get_booking,
        booking::create_booking,
        booking::update_booking,
        booking::delete_booking,
    ),
    components(schemas(
        ErrorDto,
        Role,
        UserDto,
        CreateUserDto,
        UpdateUserDto,
        LoginDto,
        HotelDto,
        CreateHotelDto,
        UpdateHotelDto,
        BookingDto,
        CreateBookingDto,
        UpdateBookingDto,
    )),
    tags(
        (name = "auth", description = "Signup, login and logout"),
        (name = "user", description = "User management"),
        (name = "hotel", description = "Hotel catalogue"),
        (name = "booking", description = "Hotel bookings"),
    )
)]
pub struct ApiDoc;

fn validated(route: MethodRouter<AppState>, schema: BodySchema) -> MethodRouter<AppState> {
    route.route_layer(middleware::from_fn_with_state(schema, validate_body))
}

fn authenticated(route: MethodRouter<AppState>, state: &AppState) -> MethodRouter<AppState> {
    route.route_layer(middleware::from_fn_with_state(state.clone(), require_auth))
}

/// Requires a session whose user satisfies `rule`.
fn guarded(route: MethodRouter<AppState>, state: &AppState, rule: RoleRule) -> MethodRouter<AppState> {
    authenticated(
        route.route_layer(middleware::from_fn_with_state(rule, require_roles)),
        state,
    )
}

pub fn auth_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/auth/signup", validated(post(auth::signup), CREATE_USER_SCHEMA))
        .route("/auth/login", validated(post(auth::login), LOGIN_SCHEMA))
        .route("/auth/logout", authenticated(post(auth::logout), state))
}

pub fn user_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/users",
            get(user::get_users).merge(validated(post(user::create_user), CREATE_USER_SCHEMA)),
        )
        .route(
            "/users/{id}",
            guarded(get(user::get_user), state, ADMIN_OR_SELF)
                .merge(validated(
                    guarded(put(user::update_user), state, ADMIN_OR_SELF),
                    UPDATE_USER_SCHEMA,
                ))
                .merge(guarded(
                    delete(user::delete_user),
                    state,
                    ADMIN_OR_SELF,
                )),
        )
}

pub fn hotel_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/hotel",
            get(hotel::get_hotels).merge(validated(
                guarded(post(hotel::create_hotel), state, ADMIN),
                CREATE_HOTEL_SCHEMA,
            )),
        )
        .route(
            "/hotel/{id}",
            get(hotel::get_hotel)
                .merge(validated(
                    guarded(put(hotel::update_hotel), state, ADMIN),
                    UPDATE_HOTEL_SCHEMA,
                ))
                .merge(guarded(delete(hotel::delete_hotel), state, ADMIN)),
        )
}

/// Booking writes admit admins, and a user whose id equals the `id` path segment.
/// The segment is the booking id here, so for regular users the self check only
/// passes when a booking id happens to equal their user id.
pub fn booking_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/booking",
            get(booking::get_bookings).merge(validated(
                guarded(post(booking::create_booking), state, ADMIN_OR_SELF),
                CREATE_BOOKING_SCHEMA,
            )),
        )
        .route(
            "/booking/{id}",
            get(booking::get_booking)
                .merge(validated(
                    guarded(
                        put(booking::update_booking),
                        state,
                        ADMIN_OR_SELF,
                    ),
                    UPDATE_BOOKING_SCHEMA,
                ))
                .merge(guarded(
                    delete(booking::delete_booking),
                    state,
                    ADMIN_OR_SELF,
                )),
        )
}

/// Merges every route table, the API docs and the health probe.
///
/// The returned router expects a session layer around it; see `app`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(auth_routes(&state))
        .merge(user_routes(&state))
        .merge(hotel_routes(&state))
        .merge(booking_routes(&state))
        .route("/health", get(|| async { "OK" }))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
}

/// Full application: routes, sessions, bearer token translation and request tracing.
pub fn app(state: AppState, session: SessionManagerLayer<SqliteStore, SignedCookie>) -> Router {
    router(state)
        .layer(session)
        .layer(middleware::from_fn(bearer_to_session_cookie))
        .layer(TraceLayer::new_for_http())
}
