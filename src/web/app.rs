use std::sync::Arc;

use async_graphql::{
    Context, EmptyMutation, EmptySubscription, Error, Schema, http::GraphiQLSource,
};
use async_graphql_poem::{GraphQL, GraphQLSubscription};
use poem::{Route, Server, get, handler, listener::TcpListener, web::Html};
use tracing::info;

use crate::{
    query::QueryItem,
    services::request::DirectionsClient,
    structures::{Config, LatLng, Profile, RouteOptions, WalkingOptions, Waypoint},
};

struct QueryRoot;

fn walking_options(
    config: &Config,
    alley_bias: Option<f64>,
    walkway_bias: Option<f64>,
    walking_speed: Option<f64>,
) -> Result<WalkingOptions, Error> {
    let mut options = config.default_walking;
    if let Some(value) = alley_bias {
        options.set_alley_bias(value)?;
    }
    if let Some(value) = walkway_bias {
        options.set_walkway_bias(value)?;
    }
    if let Some(value) = walking_speed {
        options.set_walking_speed(value)?;
    }
    Ok(options)
}

#[async_graphql::Object]
impl QueryRoot {
    async fn ping(&self) -> &str {
        "pong"
    }

    /// Walking query items, unset arguments taken from the configured defaults.
    async fn walking_query(
        &self,
        ctx: &Context<'_>,
        alley_bias: Option<f64>,
        walkway_bias: Option<f64>,
        walking_speed: Option<f64>,
    ) -> Result<Vec<QueryItem>, Error> {
        let config = ctx.data::<Arc<Config>>()?;
        let options = walking_options(config, alley_bias, walkway_bias, walking_speed)?;
        Ok(options.query_items())
    }

    async fn route_url(
        &self,
        ctx: &Context<'_>,
        from_lat: f64,
        from_lng: f64,
        to_lat: f64,
        to_lng: f64,
        #[graphql(default)] profile: Profile,
        alley_bias: Option<f64>,
        walkway_bias: Option<f64>,
        walking_speed: Option<f64>,
    ) -> Result<String, Error> {
        let config = ctx.data::<Arc<Config>>()?;
        let client = DirectionsClient::new(&config.api)?;

        let mut options = RouteOptions::new(
            profile,
            vec![
                Waypoint::new(LatLng::new(from_lat, from_lng)),
                Waypoint::new(LatLng::new(to_lat, to_lng)),
            ],
        );
        options.walking = walking_options(config, alley_bias, walkway_bias, walking_speed)?;

        Ok(client.request_url(&options)?.to_string())
    }
}

#[handler]
async fn graphiql() -> Html<String> {
    Html(
        GraphiQLSource::build()
            .endpoint("/graphql")
            .subscription_endpoint("/ws")
            .finish(),
    )
}

pub fn app(config: Arc<Config>) -> Route {
    let schema = Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(config)
        .finish();
    Route::new()
        .at("/graphql", GraphQL::new(schema.clone()))
        .at("/ws", GraphQLSubscription::new(schema))
        .at("/graphiql", get(graphiql))
}

pub async fn server(config: Arc<Config>) -> std::io::Result<()> {
    let bind = config.server.bind.clone();
    let app = app(config);

    info!("Serving on {bind}");
    Server::new(TcpListener::bind(bind)).run(app).await
}
