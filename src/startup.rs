use std::net::TcpListener;

use actix_files::Files;
use actix_web::{dev::Server, middleware::Logger, web::Data, App, HttpServer};

use crate::{
    routes::{default_route, scrape_route},
    services::Droid,
};

pub fn run(listener: TcpListener, droid: Data<Droid>) -> Result<Server, std::io::Error> {
    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .service(Files::new("/static", "./templates/static").prefer_utf8(true))
            .service(default_route::index)
            .service(scrape_route::scrape)
            .app_data(droid.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
