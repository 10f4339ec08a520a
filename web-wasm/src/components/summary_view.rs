//! 修理費サマリーと欠陥テーブル
//!
//! 直近レスポンスのみから描画する。並べ替え・絞り込みはしない。

use leptos::prelude::*;
use repair_vision_common::{DefectRecord, DetectionReport, ServiceResponse};

#[component]
pub fn SummaryView(response: Signal<Option<ServiceResponse>>) -> impl IntoView {
    move || match response.get() {
        None => ().into_any(),
        Some(ServiceResponse::Failure { message }) => {
            view! { <p class="error-message">{message}</p> }.into_any()
        }
        Some(ServiceResponse::Success(report)) => view! { <RepairSummary report=report /> }.into_any(),
    }
}

#[component]
fn RepairSummary(report: DetectionReport) -> impl IntoView {
    view! {
        <div class="panel summary-panel">
            <h3>"Repair Summary"</h3>
            <p>
                "Total Repair Cost: "
                <span class="total-repair-cost">{format_number(report.total_repair_cost)}</span>
            </p>
            <p>
                "Total Defects Detected: "
                <span class="total-defects">{format_number(report.total_defects)}</span>
            </p>

            <h3>"Defects Table"</h3>
            <table class="defects-table">
                <thead>
                    <tr>
                        <th>"Image Index"</th>
                        <th>"Part"</th>
                        <th>"Defect Type"</th>
                        <th>"Severity"</th>
                        <th>"Repair Cost"</th>
                    </tr>
                </thead>
                <tbody>
                    {report.defects.into_iter().map(defect_row).collect_view()}
                </tbody>
            </table>
        </div>
    }
}

fn defect_row(defect: DefectRecord) -> impl IntoView {
    view! {
        <tr>
            <td>{format_number(defect.image_index)}</td>
            <td>{defect.part}</td>
            <td>{defect.defect_type}</td>
            <td>{defect.severity}</td>
            <td>{format_number(defect.repair_cost)}</td>
        </tr>
    }
}

/// 数値表示（サービスの数値をそのまま出す。450.0 は "450"）
fn format_number(value: f64) -> String {
    value.to_string()
}
