//! Route table of the HTTP API

pub mod account;
pub mod health;

use actix_web::web;

use crate::middleware::JwtAuth;

/// Register `/health` and every `/api/v1/account` route
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(web::scope("/api/v1").service(account_scope()));
}

fn account_scope() -> actix_web::Scope {
    use account::{deposit, employee, login, profile, property, register};

    web::scope("/account")
        .route("/register", web::post().to(register::register))
        .route("/login", web::post().to(login::login))
        .route("/getProfile", web::get().to(profile::get_profile))
        .service(
            web::resource("/getProfileDetails")
                .wrap(JwtAuth::new())
                .route(web::get().to(profile::get_profile_details)),
        )
        .service(
            web::resource("/createProfile")
                .wrap(JwtAuth::new())
                .route(web::post().to(profile::create_profile)),
        )
        .service(
            web::resource("/createEmployee")
                .wrap(JwtAuth::new())
                .route(web::post().to(employee::create_employee)),
        )
        .service(
            web::resource("/createProperty")
                .wrap(JwtAuth::new())
                .route(web::post().to(property::create_property)),
        )
        .service(
            web::resource("/updateProperty/{id}")
                .wrap(JwtAuth::new())
                .route(web::put().to(property::update_property)),
        )
        .service(
            web::resource("/getMyProperties")
                .wrap(JwtAuth::new())
                .route(web::get().to(property::get_my_properties)),
        )
        .service(
            web::resource("/createDepositOrder")
                .wrap(JwtAuth::new())
                .route(web::post().to(deposit::create_deposit_order)),
        )
        .service(
            web::resource("/getDepositOrders")
                .wrap(JwtAuth::new())
                .route(web::get().to(deposit::get_deposit_orders)),
        )
        .service(
            web::resource("/getMyDepositOrder/{email}")
                .wrap(JwtAuth::new())
                .route(web::get().to(deposit::get_my_deposit_orders)),
        )
}
