use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::core::parsing::de_datetime;

#[derive(Debug, Clone, Deserialize)]
pub struct TimePoint {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "de_datetime")]
    pub value: Option<DateTime<Utc>>,
}

/// One entry of the top-ten shareholder table.
#[derive(Debug, Clone, Deserialize)]
pub struct TopHolderItem {
    #[serde(alias = "chg")]
    pub change: Option<f64>,
    #[serde(alias = "held_num")]
    pub held_shares: Option<f64>,
    pub held_ratio: Option<f64>,
    #[serde(alias = "holder_name")]
    pub shareholder_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TopHoldersData {
    #[serde(default)]
    pub times: Vec<TimePoint>,
    #[serde(default)]
    pub items: Vec<TopHolderItem>,
}

/// Main per-period indicators of the F10 overview page.
#[derive(Debug, Clone, Deserialize)]
pub struct MainIndicatorItem {
    pub asset_liab_ratio: Option<f64>,
    pub net_profit_atsopc_yoy: Option<f64>,
    pub operating_income_yoy: Option<f64>,
    pub basic_eps: Option<f64>,
    pub net_selling_rate: Option<f64>,
    pub avg_roe: Option<f64>,
    pub gross_selling_rate: Option<f64>,
    pub float_shares: Option<f64>,
    pub pb: Option<f64>,
    pub np_per_share: Option<f64>,
    pub float_market_capital: Option<f64>,
    pub total_revenue: Option<f64>,
    pub market_capital: Option<f64>,
    pub pe_ttm: Option<f64>,
    pub dividend: Option<f64>,
    pub currency: Option<String>,
    pub dividend_yield: Option<f64>,
    pub net_profit_atsopc: Option<f64>,
    pub total_shares: Option<f64>,
    #[serde(alias = "report_date")]
    pub report_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MainIndicatorData {
    #[serde(default)]
    pub items: Vec<MainIndicatorItem>,
}

/// Shareholder head-count snapshot.
#[derive(Debug, Clone, Deserialize)]
pub struct ShareholderCountItem {
    #[serde(alias = "chg")]
    pub change: Option<f64>,
    pub price: Option<f64>,
    #[serde(alias = "ashare_holder")]
    pub a_share_holders: Option<i64>,
    #[serde(default, deserialize_with = "de_datetime")]
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShareholderCountData {
    #[serde(default)]
    pub items: Vec<ShareholderCountItem>,
}

/// Institutional holding change per reporting period.
#[derive(Debug, Clone, Deserialize)]
pub struct OrgHoldingChangeItem {
    #[serde(alias = "chg_date")]
    pub report_name: Option<String>,
    #[serde(alias = "institution_num")]
    pub institution_count: Option<String>,
    #[serde(alias = "chg")]
    pub change: Option<f64>,
    pub held_ratio: Option<f64>,
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "de_datetime")]
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrgHoldingChangeData {
    #[serde(default)]
    pub items: Vec<OrgHoldingChangeItem>,
}

/// One secondary offering.
#[derive(Debug, Clone, Deserialize)]
pub struct BonusAddition {
    pub actual_issue_vol: Option<f64>,
    pub actual_issue_price: Option<f64>,
    #[serde(default, alias = "listing_ad", deserialize_with = "de_datetime")]
    pub listing_at: Option<DateTime<Utc>>,
    #[serde(alias = "actual_rc_net_amt")]
    pub actual_raised_net_amount: Option<f64>,
}

/// One dividend record. The wire has carried a misspelled cancel-date key
/// historically, hence the alias.
#[derive(Debug, Clone, Deserialize)]
pub struct BonusDividendItem {
    pub dividend_year: Option<String>,
    #[serde(default, deserialize_with = "de_datetime")]
    pub ashare_ex_dividend_date: Option<DateTime<Utc>>,
    pub plan_explain: Option<String>,
    #[serde(default, alias = "cancle_dividend_date", deserialize_with = "de_datetime")]
    pub cancel_dividend_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BonusData {
    #[serde(default, alias = "addtions")]
    pub additions: Vec<BonusAddition>,
    #[serde(default)]
    pub allots: Vec<Map<String, Value>>,
    #[serde(default)]
    pub items: Vec<BonusDividendItem>,
}

/// Aggregate statistics used by the industry comparison.
#[derive(Debug, Clone, Deserialize)]
pub struct IndustryCompareStats {
    pub pe_ttm: Option<f64>,
    pub basic_eps: Option<f64>,
    pub avg_roe: Option<f64>,
    pub gross_selling_rate: Option<f64>,
    pub total_revenue: Option<f64>,
    pub net_profit_atsopc: Option<f64>,
    pub np_per_share: Option<f64>,
    pub operate_cash_flow_ps: Option<f64>,
    pub total_assets: Option<f64>,
    pub total_shares: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IndustryCompareItem {
    pub symbol: Option<String>,
    pub name: Option<String>,

    pub basic_eps: Option<f64>,
    pub total_revenue: Option<f64>,
    pub gross_selling_rate: Option<f64>,
    pub net_profit_atsopc: Option<f64>,
    pub np_per_share: Option<f64>,
    pub avg_roe: Option<f64>,
    pub pe_ttm: Option<f64>,
    pub total_assets: Option<f64>,
    pub operate_cash_flow_ps: Option<f64>,
    pub total_shares: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IndustryCompareData {
    #[serde(alias = "ind_name")]
    pub industry_name: Option<String>,
    #[serde(default, alias = "quote_time", deserialize_with = "de_datetime")]
    pub quote_at: Option<DateTime<Utc>>,
    pub avg: Option<IndustryCompareStats>,
    pub min: Option<IndustryCompareStats>,
    pub max: Option<IndustryCompareStats>,
    pub count: Option<i64>,
    #[serde(alias = "ind_code")]
    pub industry_code: Option<String>,
    #[serde(alias = "ind_class")]
    pub industry_class: Option<String>,
    pub report_name: Option<String>,
    #[serde(default)]
    pub items: Vec<IndustryCompareItem>,
}

/// Industry / concept tag.
#[derive(Debug, Clone, Deserialize)]
pub struct IndustryTag {
    #[serde(alias = "ind_code")]
    pub code: Option<String>,
    #[serde(alias = "ind_name")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IndustryCompanyInfo {
    #[serde(alias = "classi_name")]
    pub classification_name: Option<String>,
    pub provincial_name: Option<String>,
    #[serde(default, alias = "listed_date", deserialize_with = "de_datetime")]
    pub listed_at: Option<DateTime<Utc>>,
    pub main_operation_business: Option<String>,
    pub org_name_cn: Option<String>,
    pub actual_controller: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IndustryData {
    #[serde(default, alias = "concept")]
    pub concepts: Vec<IndustryTag>,
    pub concept_class: Option<String>,
    #[serde(default, alias = "industry")]
    pub industries: Vec<IndustryTag>,
    pub industry_class: Option<String>,
    pub company: Option<IndustryCompanyInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BusinessAnalysisItem {
    #[serde(alias = "report_date")]
    pub report_name: Option<String>,
    pub operating_analysis_explain: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BusinessAnalysisData {
    #[serde(default)]
    pub items: Vec<BusinessAnalysisItem>,
}

/// One executive / senior manager.
#[derive(Debug, Clone, Deserialize)]
pub struct SkholderItem {
    #[serde(alias = "personal_name")]
    pub person_name: Option<String>,
    #[serde(alias = "position_name")]
    pub position: Option<String>,
    #[serde(default, alias = "employ_date", deserialize_with = "de_datetime")]
    pub employment_start: Option<DateTime<Utc>>,
    #[serde(default, alias = "employ_ed", deserialize_with = "de_datetime")]
    pub employment_end: Option<DateTime<Utc>>,
    #[serde(alias = "resume_cn")]
    pub resume: Option<String>,
    #[serde(alias = "held_num")]
    pub held_shares: Option<f64>,
    pub annual_salary: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkholderData {
    #[serde(default)]
    pub items: Vec<SkholderItem>,
}

/// One insider trade by an executive.
#[derive(Debug, Clone, Deserialize)]
pub struct SkholderChangeItem {
    #[serde(alias = "manage_name")]
    pub manager_name: Option<String>,
    #[serde(default, alias = "chg_date", deserialize_with = "de_datetime")]
    pub change_date: Option<DateTime<Utc>>,
    #[serde(alias = "trans_avg_price")]
    pub transaction_avg_price: Option<f64>,
    #[serde(alias = "chg_shares_num")]
    pub change_shares: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkholderChangeData {
    #[serde(default)]
    pub items: Vec<SkholderChangeItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SharesChangeItem {
    #[serde(default, alias = "chg_date", deserialize_with = "de_datetime")]
    pub change_date: Option<DateTime<Utc>>,
    #[serde(alias = "chg_reason")]
    pub change_reason: Option<String>,
    pub float_shares: Option<f64>,
    pub total_shares: Option<f64>,
}

/// Upcoming release of restricted shares.
#[derive(Debug, Clone, Deserialize)]
pub struct SharesRestrictionItem {
    #[serde(default, alias = "ft_time", deserialize_with = "de_datetime")]
    pub release_time: Option<DateTime<Utc>>,
    #[serde(alias = "ft_ratio")]
    pub release_ratio: Option<f64>,
    #[serde(alias = "ft_nums")]
    pub release_shares: Option<f64>,
    #[serde(alias = "ft_type")]
    pub release_type: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SharesChangeData {
    #[serde(default)]
    pub items: Vec<SharesChangeItem>,
    #[serde(default, alias = "restricts")]
    pub restrictions: Vec<SharesRestrictionItem>,
}
