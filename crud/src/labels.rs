use std::str::FromStr;

/// Language of the visible table and log strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    ZhCn,
    En,
}

impl Locale {
    pub fn role_label(&self, is_admin: bool) -> &'static str {
        match (self, is_admin) {
            (Locale::ZhCn, true) => "管理员",
            (Locale::ZhCn, false) => "一般用户",
            (Locale::En, true) => "administrator",
            (Locale::En, false) => "ordinary user",
        }
    }

    pub fn status_label(&self, is_active: bool) -> &'static str {
        match (self, is_active) {
            (Locale::ZhCn, true) => "正常",
            (Locale::ZhCn, false) => "注销",
            (Locale::En, true) => "active",
            (Locale::En, false) => "deactivated",
        }
    }

    pub fn edit_label(&self) -> &'static str {
        match self {
            Locale::ZhCn => "修改",
            Locale::En => "edit",
        }
    }

    pub fn delete_label(&self) -> &'static str {
        match self {
            Locale::ZhCn => "删除",
            Locale::En => "delete",
        }
    }

    /// Prefix of every acknowledgment line in the channel log.
    pub fn received_prefix(&self) -> &'static str {
        match self {
            Locale::ZhCn => "接收 : ",
            Locale::En => "Received : ",
        }
    }

    pub fn toggle_nav_label(&self) -> &'static str {
        match self {
            Locale::ZhCn => "切换导航",
            Locale::En => "Toggle nav",
        }
    }

    pub fn channel_status_label(&self) -> &'static str {
        match self {
            Locale::ZhCn => "通道状态",
            Locale::En => "Channel Status",
        }
    }

    pub fn last_update_label(&self) -> &'static str {
        match self {
            Locale::ZhCn => "最后更新",
            Locale::En => "Last update",
        }
    }

    pub fn disconnect_label(&self) -> &'static str {
        match self {
            Locale::ZhCn => "断开",
            Locale::En => "Disconnect",
        }
    }

    pub fn reconnect_label(&self) -> &'static str {
        match self {
            Locale::ZhCn => "重新连接",
            Locale::En => "Reconnect",
        }
    }

    pub fn no_users_title(&self) -> &'static str {
        match self {
            Locale::ZhCn => "暂无用户",
            Locale::En => "No users",
        }
    }

    /// Explanation under the empty table.
    pub fn no_users_description(&self, connected: bool) -> &'static str {
        match (self, connected) {
            (Locale::ZhCn, true) => "用户列表为空或尚未送达。",
            (Locale::ZhCn, false) => "通道未连接。",
            (Locale::En, true) => "The user list is empty or has not arrived yet.",
            (Locale::En, false) => "The channel is not connected.",
        }
    }

    /// Column headings of the user table, in render order.
    pub fn table_headings(&self) -> [&'static str; 6] {
        match self {
            Locale::ZhCn => ["#", "用户名", "邮箱", "权限", "状态", "操作"],
            Locale::En => ["#", "Username", "Email", "Role", "Status", "Actions"],
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zh" | "zh-cn" | "zh_cn" => Ok(Locale::ZhCn),
            "en" | "en-us" | "en_us" => Ok(Locale::En),
            other => Err(format!("unsupported locale '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_labels() {
        assert_eq!(Locale::En.role_label(true), "administrator");
        assert_eq!(Locale::En.role_label(false), "ordinary user");
        assert_eq!(Locale::ZhCn.role_label(true), "管理员");
        assert_eq!(Locale::ZhCn.role_label(false), "一般用户");
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(Locale::En.status_label(true), "active");
        assert_eq!(Locale::En.status_label(false), "deactivated");
        assert_eq!(Locale::ZhCn.status_label(true), "正常");
        assert_eq!(Locale::ZhCn.status_label(false), "注销");
    }

    #[test]
    fn test_locale_from_str() {
        assert_eq!("zh-CN".parse::<Locale>(), Ok(Locale::ZhCn));
        assert_eq!(" EN ".parse::<Locale>(), Ok(Locale::En));
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn test_default_locale_matches_host_templates() {
        assert_eq!(Locale::default(), Locale::ZhCn);
        assert_eq!(Locale::default().received_prefix(), "接收 : ");
    }

    #[test]
    fn test_widget_chrome_follows_locale() {
        assert_eq!(Locale::ZhCn.reconnect_label(), "重新连接");
        assert_eq!(Locale::ZhCn.no_users_title(), "暂无用户");
        assert_eq!(Locale::ZhCn.no_users_description(false), "通道未连接。");
        assert_eq!(Locale::En.disconnect_label(), "Disconnect");
        assert_eq!(
            Locale::En.no_users_description(true),
            "The user list is empty or has not arrived yet."
        );
    }
}
