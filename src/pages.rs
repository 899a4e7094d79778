use actix_web::web;

mod auth;
mod employee;
mod holiday;
mod period;
mod time;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg
        .service(web::scope("/auth")
            .configure(auth::config))
        .service(web::scope("/employees")
            .configure(employee::config))
        .service(web::scope("/holidays")
            .configure(holiday::config))
        .service(web::scope("/time")
            .configure(time::config))
        .service(web::scope("/periods")
            .configure(period::config));
}
