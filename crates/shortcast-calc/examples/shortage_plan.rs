//! 缺料預測完整範例
//!
//! 展示從原始資料到採購建議的完整計算流程

use chrono::NaiveDate;
use rust_decimal::Decimal;
use shortcast_calc::ShortagePlanner;
use shortcast_core::*;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("===== Part Shortage Forecast Example =====\n");

    let plan_date = NaiveDate::from_ymd_opt(2026, 8, 23).unwrap();

    // 步驟 1: 計算配置
    println!("[1] Configure Planner");
    let config = PlannerConfig::new(plan_date)
        .with_lookback_days(30)
        .with_horizon_days(7)
        .with_default_lead_time(3)
        .with_lead_time_override("ACC002", 2);
    println!("    Lookback 30 days, Horizon 7 days, Lead time 3 days (ACC002: 2)\n");

    // 步驟 2: 歷史需求（實務上來自訂單資料庫，排除已取消訂單）
    println!("[2] Demand History");
    let mut history = Vec::new();
    for (offset, qty) in [(13i64, 12), (6, 8), (12, 6), (5, 2), (10, 9), (3, 7)] {
        history.push(DemandHistory::new(
            1001,
            plan_date - chrono::Duration::days(offset),
            Decimal::from(qty),
        ));
    }
    println!("    Product 1001: {} history points\n", history.len());

    // 步驟 3: BOM 與零件主檔
    println!("[3] BOM & Part Master");
    let bom_rows = vec![
        RawBomRow::new("1001", "FAB003", Decimal::from(2)),
        RawBomRow::new("1001", "ACC002", Decimal::ONE),
        RawBomRow::new("bad-code", "MIS001", Decimal::ONE), // 會被剔除並列入對帳
    ];
    let parts = vec![
        Part::new("FAB003", Decimal::from(40), Decimal::from(10)),
        Part::new("ACC002", Decimal::from(30), Decimal::from(5)),
    ];
    println!("    {} BOM rows, {} master parts\n", bom_rows.len(), parts.len());

    // 步驟 4: 採購在途
    println!("[4] Open Purchase Orders");
    let open_arrivals = vec![OpenArrival::new(
        "FAB003",
        plan_date + chrono::Duration::days(3),
        Decimal::from(20),
    )];
    println!("    FAB003: 20 pcs arriving in 3 days\n");

    // 步驟 5: 機台感測事件（近 24 小時）
    println!("[5] Sensor Events");
    let sensor_events = vec![
        SensorEvent::new(
            "M01",
            Decimal::from(90), // 溫度超標
            Decimal::new(5, 2),
            1200,
            plan_date.and_hms_opt(8, 0, 0).unwrap(),
        ),
        SensorEvent::new(
            "M01",
            Decimal::from(72),
            Decimal::new(4, 2),
            1250,
            plan_date.and_hms_opt(9, 0, 0).unwrap(),
        ),
    ];
    println!("    {} events from machine M01\n", sensor_events.len());

    // 步驟 6: 執行缺料計算
    println!("[6] Run Shortage Plan");
    let inputs = PlanInputs {
        history,
        bom_rows,
        parts,
        open_arrivals,
        sensor_events,
    };
    let plan = ShortagePlanner::new(config).plan(&inputs)?;
    println!("    Completed in {} ms\n", plan.calculation_time_ms.unwrap_or(0));

    // 步驟 7: 顯示結果
    println!("[7] Results");
    println!("    Capacity factor: {}", plan.capacity_factor);

    println!("\n    --- Risk parts ---");
    for part_no in &plan.risk_parts {
        println!("    {}", part_no);
    }

    println!("\n    --- Procurement summary ---");
    for line in &plan.procurement_summary {
        println!(
            "    {}: total {} (first order {}, first eta {})",
            line.part_no, line.total_recommended_qty, line.first_order_date, line.first_eta
        );
    }

    println!("\n    --- Noteworthy simulation days ---");
    for day in plan.ledger.iter().filter(|day| day.is_noteworthy()) {
        println!(
            "    {} {}: start {} demand {} end {} rec {}{}",
            day.date,
            day.part_no,
            day.start_available,
            day.gross_requirement,
            day.end_available,
            day.recommended_qty,
            if day.shortage { "  [SHORTAGE]" } else { "" }
        );
    }

    if !plan.reconciliation.is_clean() {
        println!("\n    --- Reconciliation ---");
        println!("{}", serde_json::to_string_pretty(&plan.reconciliation)?);
    }

    for warning in &plan.warnings {
        println!("    WARN [{}] {}", warning.subject, warning.message);
    }

    Ok(())
}
