use crate::{
    api::{attendance, employee},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    // Helper to build per-scope limiter
    fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
        let per_ms = if requests_per_min == 0 {
            1
        } else {
            60_000 / requests_per_min as u64
        };
        let cfg = GovernorConfigBuilder::default()
            .per_millisecond(per_ms)
            .burst_size(requests_per_min)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .unwrap();
        Governor::new(&cfg)
    }

    cfg.service(
        web::scope("/employees")
            .wrap(build_limiter(config.rate_per_min))
            // /employees
            .service(
                web::resource("")
                    .route(web::post().to(employee::create_employee))
                    .route(web::get().to(employee::list_employees)),
            )
            // /employees/{id}
            .service(
                web::resource("/{id}")
                    .route(web::put().to(employee::update_employee))
                    .route(web::delete().to(employee::delete_employee)),
            ),
    );

    cfg.service(
        web::scope("/attendance")
            .wrap(build_limiter(config.rate_per_min))
            // fixed segments before the {employee_id} catch-all
            .service(
                web::resource("/summary/today").route(web::get().to(attendance::today_summary)),
            )
            .service(
                web::resource("/check/{employee_id}/{date}")
                    .route(web::get().to(attendance::check_attendance)),
            )
            // /attendance/{employee_id}
            .service(
                web::resource("/{employee_id}")
                    .route(web::post().to(attendance::mark_attendance))
                    .route(web::get().to(attendance::attendance_history)),
            ),
    );
}
