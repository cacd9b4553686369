use astra::Request;
use tracing::{error, info};

use crate::auth::guard::{clear_session_cookie, current_admin, session_cookie, session_token, AdminUser};
use crate::auth::magic::MagicLinkService;
use crate::auth::sessions::{create_session, revoke_session};
use crate::db::enquiries::list_enquiries;
use crate::db::listings::{create_listing_from_draft, list_listing_history};
use crate::db::magic_auth::{redeem_magic_link, request_magic_link};
use crate::db::quotations::list_quotations;
use crate::db::stats::load_dashboard_stats;
use crate::domain::upload::UploadForm;
use crate::domain::validation::FieldErrors;
use crate::errors::ServerError;
use crate::responses::{html_response, redirect, redirect_with_cookie, xlsx_response, ResultResp};
use crate::router::{field, is_htmx, parse_query, read_form, unix_now};
use crate::spreadsheets::{enquiries_xlsx, listings_xlsx, quotations_xlsx};
use crate::state::AppState;
use crate::templates::pages::{self, DashboardVm};

const RECENT_ENQUIRIES: i64 = 5;

pub fn login(req: &Request, state: &AppState) -> ResultResp {
    if current_admin(req, state, unix_now())?.is_some() {
        return redirect("/admin/dashboard");
    }
    html_response(pages::login_page())
}

/// Same answer for every address, so the allow-list can't be probed.
pub fn request_link(req: Request, state: &AppState) -> ResultResp {
    let htmx = is_htmx(&req);
    let raw = field(&read_form(req)?, "email");
    let email = raw.trim().to_lowercase();

    if MagicLinkService::normalize_email(&email).is_ok() && state.config.is_admin_email(&email) {
        let issued = request_magic_link(&state.db, &email, unix_now())?;
        let link = format!("{}{}", state.config.base_url, issued.link);

        match &state.mailer {
            Some(mailer) => {
                if let Err(e) = mailer.send_magic_link(&issued.email, &link) {
                    error!(error = %e, email = %issued.email, "failed to send magic link");
                } else {
                    info!(email = %issued.email, "magic link sent");
                }
            }
            None => info!(email = %issued.email, link = %link, "mail not configured, magic link logged"),
        }
    } else {
        info!(email = %email, "sign-in requested for non-admin email");
    }

    if htmx {
        html_response(pages::check_email_content(&email))
    } else {
        html_response(pages::check_email_page(&email))
    }
}

pub fn redeem_link(req: &Request, state: &AppState) -> ResultResp {
    let token = parse_query(req).remove("token").unwrap_or_default();
    let now = unix_now();

    let redeemed = redeem_magic_link(&state.db, &token, now)?;
    if !state.config.is_admin_email(&redeemed.email) {
        return Err(ServerError::Unauthorized("this account has no admin access".into()));
    }

    let session = state
        .db
        .with_conn(|conn| create_session(conn, redeemed.user_id, now))?;
    info!(user_id = redeemed.user_id, email = %redeemed.email, "admin signed in");

    let secure = state.config.base_url.starts_with("https://");
    redirect_with_cookie("/admin/dashboard", &session_cookie(&session, secure))
}

pub fn logout(req: &Request, state: &AppState) -> ResultResp {
    if let Some(token) = session_token(req) {
        state
            .db
            .with_conn(|conn| revoke_session(conn, &token, unix_now()))?;
    }
    redirect_with_cookie("/admin/login", &clear_session_cookie())
}

pub fn dashboard(user: &AdminUser, state: &AppState) -> ResultResp {
    let now = unix_now();
    let (stats, recent_enquiries) = state.db.with_conn(|conn| {
        Ok((
            load_dashboard_stats(conn, now)?,
            list_enquiries(conn, Some(RECENT_ENQUIRIES))?,
        ))
    })?;

    html_response(pages::dashboard_page(&DashboardVm {
        email: user.email.clone(),
        stats,
        recent_enquiries,
    }))
}

fn blank_upload_form() -> UploadForm {
    UploadForm {
        area_unit: "sqft".into(),
        price_unit: "per-sqft".into(),
        ..UploadForm::default()
    }
}

pub fn upload_form(user: &AdminUser) -> ResultResp {
    html_response(pages::upload_page(
        &user.email,
        &blank_upload_form(),
        &FieldErrors::new(),
        None,
    ))
}

pub fn submit_upload(req: Request, user: &AdminUser, state: &AppState) -> ResultResp {
    let raw = read_form(req)?;
    let form = UploadForm {
        title: field(&raw, "title"),
        area: field(&raw, "area"),
        area_unit: field(&raw, "area_unit"),
        district: field(&raw, "district"),
        taluk: field(&raw, "taluk"),
        village: field(&raw, "village"),
        price: field(&raw, "price"),
        price_unit: field(&raw, "price_unit"),
        description: field(&raw, "description"),
        photos: field(&raw, "photos"),
    };

    match form.validate() {
        Ok(draft) => {
            let listing = state
                .db
                .with_conn(|conn| create_listing_from_draft(conn, draft, unix_now()))?;
            info!(listing_id = %listing.id, by = %user.email, "listing uploaded");
            html_response(pages::upload_page(
                &user.email,
                &blank_upload_form(),
                &FieldErrors::new(),
                Some(&listing),
            ))
        }
        Err(errors) => html_response(pages::upload_page(&user.email, &form, &errors, None)),
    }
}

pub fn reports(user: &AdminUser, state: &AppState) -> ResultResp {
    let history = state.db.with_conn(|conn| list_listing_history(conn))?;
    html_response(pages::reports_page(&user.email, &history))
}

pub fn export_enquiries(state: &AppState) -> ResultResp {
    let rows = state.db.with_conn(|conn| list_enquiries(conn, None))?;
    xlsx_response(enquiries_xlsx(&rows)?, "enquiries.xlsx")
}

pub fn export_quotations(state: &AppState) -> ResultResp {
    let rows = state.db.with_conn(|conn| list_quotations(conn))?;
    xlsx_response(quotations_xlsx(&rows)?, "quotations.xlsx")
}

pub fn export_listings(state: &AppState) -> ResultResp {
    let rows = state.db.with_conn(|conn| list_listing_history(conn))?;
    xlsx_response(listings_xlsx(&rows)?, "listings.xlsx")
}
