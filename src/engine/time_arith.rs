// ==========================================
// 车间生产追踪系统 - 时间运算模块
// ==========================================
// 职责: HH:MM 归一化、跨午夜时长计算、时长展示格式化
// 红线: 本模块永不 panic；非法输入一律以 None 表示"尚未有效"
// ==========================================

/// 把 "HH:MM" 文本解析为当日分钟数（0..=1439）
///
/// 接受 "H:MM" / "HH:MM"；小时 > 23 或分钟 > 59 返回 None。
/// 无冒号、多段冒号、非数字均返回 None。
pub fn parse_hhmm(raw: &str) -> Option<u32> {
    let mut parts = raw.trim().splitn(2, ':');
    let hour_part = parts.next()?;
    let minute_part = parts.next()?;

    let hour: u32 = hour_part.parse().ok()?;
    let minute: u32 = minute_part.parse().ok()?;

    if hour > 23 || minute > 59 {
        return None;
    }
    Some(hour * 60 + minute)
}

/// 把当日分钟数格式化为 "HH:MM"（对 1440 取模，跨午夜回绕）
pub fn format_hhmm(total_minutes: u32) -> String {
    let m = total_minutes % 1440;
    format!("{:02}:{:02}", m / 60, m % 60)
}

/// 归一化操作工录入的时刻文本
///
/// 接受纯数字或带冒号的不完整输入:
/// - "9"    -> "09:00"（需 allow_hour_only）
/// - "0930" -> "09:30"
/// - "930"  -> "09:30"
/// - "09:3" -> "09:03"（分钟按数值左补零）
/// - "09:"  -> "09:00"（需 allow_hour_only）
///
/// 小时 > 23 或分钟 > 59 返回 None；调用方把 None 视为"尚未有效"，
/// 永不以异常形式暴露。
pub fn normalize_time_of_day(raw: &str, allow_hour_only: bool) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let (hour, minute) = if let Some((h, m)) = trimmed.split_once(':') {
        if h.is_empty() || h.len() > 2 || !h.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        if m.is_empty() {
            // "09:" 等价于仅录入小时
            if !allow_hour_only {
                return None;
            }
            (h.parse::<u32>().ok()?, 0)
        } else {
            if m.len() > 2 || !m.chars().all(|c| c.is_ascii_digit()) {
                return None;
            }
            (h.parse::<u32>().ok()?, m.parse::<u32>().ok()?)
        }
    } else {
        // 纯数字输入: 1-2位=小时, 3位=H MM, 4位=HH MM
        if !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        match trimmed.len() {
            1 | 2 => {
                if !allow_hour_only {
                    return None;
                }
                (trimmed.parse::<u32>().ok()?, 0)
            }
            3 => (
                trimmed[..1].parse::<u32>().ok()?,
                trimmed[1..].parse::<u32>().ok()?,
            ),
            4 => (
                trimmed[..2].parse::<u32>().ok()?,
                trimmed[2..].parse::<u32>().ok()?,
            ),
            _ => return None,
        }
    };

    if hour > 23 || minute > 59 {
        return None;
    }
    Some(format!("{:02}:{:02}", hour, minute))
}

/// 计算从 start 到 end 的分钟数
///
/// end 在数值上早于 start 时按跨午夜处理（+1440），
/// 故 23:10 → 00:20 得 70。任一端解析失败返回 None。
/// 0 是合法时长（起止相同），与 None 语义不同。
pub fn duration_minutes(start: &str, end: &str) -> Option<i64> {
    let s = parse_hhmm(start)? as i64;
    let mut e = parse_hhmm(end)? as i64;
    if e < s {
        e += 1440; // 跨午夜
    }
    Some(e - s)
}

/// 把分钟时长渲染为 "Hh Mmin (T minutos)"
///
/// 策略: 只向操作工展示正时长；None/0/负数返回空字符串。
pub fn format_duration(minutes: Option<i64>) -> String {
    match minutes {
        Some(m) if m > 0 => format!("{}h {}min ({} minutos)", m / 60, m % 60, m),
        _ => String::new(),
    }
}
