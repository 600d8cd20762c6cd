/// Every user-facing string in one place.
pub struct UiText {
    pub app_title: &'static str,
    pub steps_heading: &'static str,
    pub fees_heading: &'static str,
    pub network_label: &'static str,

    pub deployment_heading: &'static str,
    pub deployment_help_curve: &'static str,
    pub deployment_help_v2: &'static str,

    pub tax_profile_heading: &'static str,
    pub tax_mode_label: &'static str,
    pub profile_label: &'static str,
    pub profile_help_zero: &'static str,
    pub profile_help_super: &'static str,
    pub profile_help_basic: &'static str,
    pub profile_help_advanced: &'static str,

    pub basics_heading: &'static str,
    pub start_label: &'static str,
    pub liquidity_label: &'static str,
    pub remove_header_label: &'static str,
    pub stealth_label: &'static str,

    pub curve_heading: &'static str,
    pub final_type_label: &'static str,
    pub tax_schedule_label: &'static str,
    pub wallet_limits_label: &'static str,
    pub tx_limits_label: &'static str,
    pub blank_means_no_limit: &'static str,

    pub v2_liquidity_heading: &'static str,
    pub trading_mode_label: &'static str,
    pub v2_stealth_label: &'static str,
    pub v2_limits_heading: &'static str,
    pub tax_decay_label: &'static str,
    pub limit_growth_label: &'static str,

    pub metadata_heading: &'static str,
    pub socials_label: &'static str,
    pub media_label: &'static str,
    pub auto_brand_label: &'static str,
    pub asset_url_option: &'static str,
    pub asset_file_option: &'static str,

    pub review_heading: &'static str,
    pub token_address_label: &'static str,
    pub acknowledge_label: &'static str,
    pub payload_preview_label: &'static str,
    pub submitting_label: &'static str,
    pub submission_failed_label: &'static str,

    pub result_heading: &'static str,
    pub result_tx_label: &'static str,
    pub result_link_label: &'static str,
    pub start_over_button: &'static str,

    pub back_button: &'static str,
    pub next_button: &'static str,
    pub confirm_button: &'static str,

    pub creation_fee_label: &'static str,
    pub platform_fee_label: &'static str,
    pub graduation_fee_label: &'static str,
    pub addons_label: &'static str,
    pub total_due_label: &'static str,
    pub choose_profile_first: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    app_title: "Token Launch Wizard",
    steps_heading: "Steps",
    fees_heading: "Fees",
    network_label: "Network",

    deployment_heading: "Launch type",
    deployment_help_curve: "Trade on a bonding curve until the graduation cap, then move to open liquidity.",
    deployment_help_v2: "Create the pool straight away with your own liquidity.",

    tax_profile_heading: "Tax & profile",
    tax_mode_label: "Tax mode",
    profile_label: "Profile",
    profile_help_zero: "No curve tax and no limits.",
    profile_help_super: "No curve tax, wallet and transaction limits.",
    profile_help_basic: "Flat starting tax and limits that lift after fixed durations.",
    profile_help_advanced: "Tax and limits that step every interval, paid to your receiver.",

    basics_heading: "Token basics",
    start_label: "Start",
    liquidity_label: "Liquidity at graduation",
    remove_header_label: "Remove platform header",
    stealth_label: "Stealth launch",

    curve_heading: "Curve settings",
    final_type_label: "After the curve",
    tax_schedule_label: "Tax schedule",
    wallet_limits_label: "Wallet limit",
    tx_limits_label: "Transaction limit",
    blank_means_no_limit: "Leave a limit blank for no limit.",

    v2_liquidity_heading: "Liquidity & trading",
    trading_mode_label: "Trading opens",
    v2_stealth_label: "Protect the first blocks",
    v2_limits_heading: "Taxes & limits",
    tax_decay_label: "Decay taxes over time",
    limit_growth_label: "Grow limits over time",

    metadata_heading: "Socials & media",
    socials_label: "Links",
    media_label: "Media",
    auto_brand_label: "Generate branding automatically",
    asset_url_option: "URL",
    asset_file_option: "File",

    review_heading: "Review",
    token_address_label: "Token address (optional)",
    acknowledge_label: "I have checked these settings; they cannot be changed after launch.",
    payload_preview_label: "Request preview",
    submitting_label: "Submitting launch...",
    submission_failed_label: "Submission failed",

    result_heading: "Launched",
    result_tx_label: "Transaction",
    result_link_label: "View on explorer",
    start_over_button: "Launch another token",

    back_button: "⬅ Back",
    next_button: "Next ➡",
    confirm_button: "🚀 Confirm launch",

    creation_fee_label: "Creation fee",
    platform_fee_label: "Platform fee",
    graduation_fee_label: "Graduation fee",
    addons_label: "Add-ons",
    total_due_label: "Due at creation",
    choose_profile_first: "Choose a profile to see fees",
};
