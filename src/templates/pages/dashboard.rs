use crate::db::enquiries::EnquiryRow;
use crate::db::stats::DashboardStats;
use crate::templates::components::{format_timestamp, stat_card};
use crate::templates::layouts::admin_layout;
use maud::{html, Markup};

pub struct DashboardVm {
    pub email: String,
    pub stats: DashboardStats,
    pub recent_enquiries: Vec<EnquiryRow>,
}

pub fn dashboard_page(vm: &DashboardVm) -> Markup {
    let s = &vm.stats;

    admin_layout(
        "Dashboard",
        "/admin/dashboard",
        &vm.email,
        html! {
            div class="grid stats" {
                (stat_card("Total Lands Listed", s.total_listings, "Currently active properties"))
                (stat_card(
                    "Quotations Requested",
                    s.quotations_total,
                    &format!("{} this month", s.quotations_this_month),
                ))
                (stat_card(
                    "Customer Enquiries",
                    s.enquiries_total,
                    &format!("{} this month", s.enquiries_this_month),
                ))
                (stat_card("Locations", s.distinct_locations, "Distinct listing locations"))
            }

            section class="card" {
                h2 { "Recent Enquiries" }
                @if vm.recent_enquiries.is_empty() {
                    p class="muted" { "No recent activity to show." }
                } @else {
                    table {
                        thead {
                            tr { th { "Received" } th { "Name" } th { "Email" } th { "Subject" } }
                        }
                        tbody {
                            @for e in &vm.recent_enquiries {
                                tr {
                                    td { (format_timestamp(e.created_at)) }
                                    td { (e.name) }
                                    td { a href=(format!("mailto:{}", e.email)) { (e.email) } }
                                    td { (e.subject) }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
