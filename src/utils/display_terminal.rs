//! 터미널 출력 포맷팅 유틸리티
//!
//! [`AppContext`](crate::core::AppContext) 조립 과정을 단계별로 출력합니다.

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║              🔄 BUILDING APP CONTEXT             ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    let border = "═".repeat(50);

    println!("╔{}╗", border);
    println!("║{:^49}║", title);
    println!("╚{}╝", border);
}

/// `→ Step 1: Connecting user store`
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// `✓ Step 1: User store ready (mongo)`
pub fn print_step_complete(step: u8, description: &str, detail: &str) {
    println!("✓ Step {}: {} ({})", step, description, detail);
}

/// 들여쓰기된 하위 작업 상태
///
/// ```text
///    ├─ google: enabled
///    ├─ facebook: disabled
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 조립이 끝난 컨텍스트 요약
pub fn print_context_summary(user_store: &str, session_store: &str, oauth_providers: &[String]) {
    let providers = if oauth_providers.is_empty() {
        "none".to_string()
    } else {
        oauth_providers.join(", ")
    };

    println!();
    print_boxed_title("🎉 APP CONTEXT READY");
    println!("   📦 User store: {}", user_store);
    println!("   🍪 Session store: {}", session_store);
    println!("   🔑 OAuth providers: {}", providers);
    println!();
}
