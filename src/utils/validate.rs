use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("Invalid email regex")
});

static CLASS_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("Invalid class code regex"));

// 与数据库列宽保持一致
pub const TEACHER_NAME_MAX: usize = 150;
pub const EMAIL_MAX: usize = 150;
pub const CLASS_NAME_MAX: usize = 100;
pub const CLASS_CODE_MAX: usize = 20;
pub const STUDENT_NAME_MAX: usize = 150;
pub const GRADE_LABEL_MAX: usize = 100;

/// 邮箱统一去除首尾空白并转为小写后存储与比较
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.chars().count() > EMAIL_MAX {
        return Err("Email must be at most 150 characters");
    }
    // 邮箱格式校验：必须包含 @ 和 .
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

/// 名称与评估名称：去除空白后非空，且不超过列宽
pub fn validate_text(value: &str, max_len: usize) -> Result<(), &'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("Value must not be blank");
    }
    if trimmed.chars().count() > max_len {
        return Err("Value is too long");
    }
    Ok(())
}

pub fn validate_class_code(code: &str) -> Result<(), &'static str> {
    if code.is_empty() || code.len() > CLASS_CODE_MAX {
        return Err("Class code length must be between 1 and 20 characters");
    }
    // 选课码格式校验：只能包含字母、数字、下划线或连字符
    if !CLASS_CODE_RE.is_match(code) {
        return Err("Class code must contain only letters, numbers, underscores or hyphens");
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.is_empty() {
        return Err("Password must not be empty");
    }
    // argon2 接受任意长度，这里限制上限避免超长输入占用哈希时间
    if password.len() > 1024 {
        return Err("Password must be at most 1024 bytes");
    }
    Ok(())
}

pub fn validate_grade_value(value: f64) -> Result<(), &'static str> {
    if !value.is_finite() {
        return Err("Grade value must be a finite number");
    }
    Ok(())
}
