use crate::db::listings::ListingHistoryRow;
use crate::templates::components::{format_price, format_timestamp};
use crate::templates::layouts::admin_layout;
use maud::{html, Markup};

pub fn reports_page(admin_email: &str, history: &[ListingHistoryRow]) -> Markup {
    admin_layout(
        "Reports",
        "/admin/reports",
        admin_email,
        html! {
            div class="grid two" {
                (export_card(
                    "Export Leads",
                    "Download a spreadsheet of all customer enquiries.",
                    "/admin/reports/enquiries.xlsx",
                    "Download Leads",
                ))
                (export_card(
                    "Export Quotations",
                    "Download a spreadsheet of all quotation requests.",
                    "/admin/reports/quotations.xlsx",
                    "Download Quotations",
                ))
            }

            section class="card" {
                h2 { "Uploaded Land History" }
                p class="muted" {
                    "A log of all properties uploaded to the platform. "
                    a href="/admin/reports/listings.xlsx" { "Download as spreadsheet" }
                }
                table {
                    thead {
                        tr { th { "Property Name" } th { "Location" } th { "Added" } th class="num" { "Price" } }
                    }
                    tbody {
                        @for row in history {
                            tr {
                                td { a href=(format!("/listings/{}", row.listing.id)) { (row.listing.name) } }
                                td { (row.listing.location) }
                                td { (format_timestamp(row.created_at)) }
                                td class="num" { (format_price(row.listing.price)) }
                            }
                        }
                    }
                }
            }
        },
    )
}

fn export_card(title: &str, description: &str, href: &str, label: &str) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            p class="muted" { (description) }
            a href=(href) class="button" download { (label) }
        }
    }
}
