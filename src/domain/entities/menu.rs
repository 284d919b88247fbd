/// In-app destinations. Paths without an implemented screen resolve to
/// `NotFound`, mirroring how the router treats unknown URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    Login,
    Register,
    #[default]
    Dashboard,
    Base,
    CategoryList,
    ProductAttr,
    ProductSpec,
    ProductList,
    Inventory,
    Users,
    Roles,
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Route {
        match path {
            "/login" => Route::Login,
            "/register" => Route::Register,
            "/" => Route::Dashboard,
            "/base" => Route::Base,
            "/category/list" => Route::CategoryList,
            "/product/attr" => Route::ProductAttr,
            "/product/spec" => Route::ProductSpec,
            "/product/list" => Route::ProductList,
            "/inventory" | "/inventory/list" => Route::Inventory,
            "/users" => Route::Users,
            "/settings/roles" => Route::Roles,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Dashboard => "/",
            Route::Base => "/base",
            Route::CategoryList => "/category/list",
            Route::ProductAttr => "/product/attr",
            Route::ProductSpec => "/product/spec",
            Route::ProductList => "/product/list",
            Route::Inventory => "/inventory",
            Route::Users => "/users",
            Route::Roles => "/settings/roles",
            Route::NotFound => "/404",
        }
    }

    /// Screens reachable without a session.
    pub fn is_public(&self) -> bool {
        matches!(self, Route::Login | Route::Register)
    }
}

/// 菜单类型：平台管理员专属、租户专属或全部可见。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAudience {
    All,
    Tenant,
    SuperAdmin,
}

/// 侧边栏菜单项，`code` 为权限控制码。
#[derive(Debug, Clone, PartialEq)]
pub struct MenuEntry {
    pub path: &'static str,
    pub text: &'static str,
    pub code: Option<&'static str>,
    pub audience: MenuAudience,
    pub children: Vec<MenuEntry>,
}

impl MenuEntry {
    fn new(path: &'static str, text: &'static str, code: &'static str) -> Self {
        Self {
            path,
            text,
            code: Some(code),
            audience: MenuAudience::All,
            children: Vec::new(),
        }
    }

    fn audience(mut self, audience: MenuAudience) -> Self {
        self.audience = audience;
        self
    }

    fn children(mut self, children: Vec<MenuEntry>) -> Self {
        self.children = children;
        self
    }
}

/// WMS 系统菜单配置。
pub fn menu_config() -> Vec<MenuEntry> {
    vec![
        MenuEntry::new("/", "仪表盘", "wms:dashboard"),
        MenuEntry::new("/base", "基本信息", "wms:base").audience(MenuAudience::Tenant),
        MenuEntry::new("/category", "类目管理", "wms:category").children(vec![MenuEntry::new(
            "/category/list",
            "类目列表",
            "wms:category:list",
        )]),
        MenuEntry::new("/product", "产品管理", "wms:product").children(vec![
            MenuEntry::new("/product/attr", "属性管理", "wms:product:attr"),
            MenuEntry::new("/product/spec", "规格管理", "wms:product:spec"),
            MenuEntry::new("/product/list", "产品列表", "wms:product:list"),
        ]),
        MenuEntry::new("/inventory", "库存管理", "wms:inventory").children(vec![
            MenuEntry::new("/inventory/list", "库存查询", "wms:inventory:list"),
            MenuEntry::new("/inventory/inbound", "入库管理", "wms:inventory:inbound"),
            MenuEntry::new("/inventory/outbound", "出库管理", "wms:inventory:outbound"),
        ]),
        MenuEntry::new("/users", "员工管理", "wms:users"),
        MenuEntry::new("/tenants", "租户管理", "wms:tenants").audience(MenuAudience::SuperAdmin),
        MenuEntry::new("/settings", "系统设置", "wms:settings").children(vec![
            MenuEntry::new("/settings/roles", "角色管理", "wms:settings:roles"),
            MenuEntry::new("/settings/permissions", "权限管理", "wms:settings:permissions"),
        ]),
    ]
}

/// Drops entries whose permission code the session lacks; `*` sees
/// everything. A parent whose children all filtered away disappears with
/// them.
pub fn filter_by_permissions(items: &[MenuEntry], permissions: &[String]) -> Vec<MenuEntry> {
    if permissions.iter().any(|code| code == "*") {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| match item.code {
            Some(code) => permissions.iter().any(|held| held == code),
            None => true,
        })
        .filter_map(|item| {
            let had_children = !item.children.is_empty();
            let mut item = item.clone();
            item.children = filter_by_permissions(&item.children, permissions);
            if had_children && item.children.is_empty() && item.code.is_some() {
                None
            } else {
                Some(item)
            }
        })
        .collect()
}

/// 按菜单类型过滤：平台管理员看平台菜单，租户看租户菜单。
pub fn filter_by_audience(items: &[MenuEntry], is_platform_admin: bool) -> Vec<MenuEntry> {
    items
        .iter()
        .filter(|item| match item.audience {
            MenuAudience::All => true,
            MenuAudience::SuperAdmin => is_platform_admin,
            MenuAudience::Tenant => !is_platform_admin,
        })
        .cloned()
        .collect()
}

/// Breadcrumb trail for a path: 首页 plus every menu ancestor, falling back
/// to the raw path segment when the tree has no entry for it.
pub fn breadcrumb_trail(items: &[MenuEntry], path: &str) -> Vec<String> {
    let mut trail = vec!["首页".to_string()];
    if path == "/" || path.is_empty() {
        return trail;
    }

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    for idx in 0..segments.len() {
        let prefix = format!("/{}", segments[..=idx].join("/"));
        match find_by_path(items, &prefix) {
            Some(entry) => trail.push(entry.text.to_string()),
            None => trail.push(segments[idx].to_string()),
        }
    }
    trail
}

pub fn find_by_path<'a>(items: &'a [MenuEntry], path: &str) -> Option<&'a MenuEntry> {
    for item in items {
        if item.path == path {
            return Some(item);
        }
        if let Some(found) = find_by_path(&item.children, path) {
            return Some(found);
        }
    }
    None
}

/// All permission codes in the tree, used by the role editor's checkbox
/// list.
pub fn all_permission_codes(items: &[MenuEntry]) -> Vec<(&'static str, String)> {
    let mut codes = Vec::new();
    collect_codes(items, 0, &mut codes);
    codes
}

fn collect_codes(items: &[MenuEntry], depth: usize, out: &mut Vec<(&'static str, String)>) {
    for item in items {
        if let Some(code) = item.code {
            let indent = "　".repeat(depth);
            out.push((code, format!("{indent}{}", item.text)));
        }
        collect_codes(&item.children, depth + 1, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn held(codes: &[&str]) -> Vec<String> {
        codes.iter().map(|code| code.to_string()).collect()
    }

    #[test]
    fn wildcard_permission_sees_the_whole_tree() {
        let filtered = filter_by_permissions(&menu_config(), &held(&["*"]));
        assert_eq!(filtered.len(), menu_config().len());
    }

    #[test]
    fn entries_without_a_held_code_are_dropped() {
        let filtered = filter_by_permissions(
            &menu_config(),
            &held(&["wms:dashboard", "wms:users"]),
        );
        let texts: Vec<&str> = filtered.iter().map(|item| item.text).collect();

        assert_eq!(texts, vec!["仪表盘", "员工管理"]);
    }

    #[test]
    fn child_codes_filter_within_a_kept_parent() {
        let filtered = filter_by_permissions(
            &menu_config(),
            &held(&["wms:product", "wms:product:list"]),
        );

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].text, "产品管理");
        let children: Vec<&str> = filtered[0].children.iter().map(|item| item.text).collect();
        assert_eq!(children, vec!["产品列表"]);
    }

    #[test]
    fn tenant_menu_hides_super_admin_entries() {
        let tenant_view = filter_by_audience(&menu_config(), false);
        assert!(tenant_view.iter().all(|item| item.text != "租户管理"));
        assert!(tenant_view.iter().any(|item| item.text == "基本信息"));

        let admin_view = filter_by_audience(&menu_config(), true);
        assert!(admin_view.iter().any(|item| item.text == "租户管理"));
        assert!(admin_view.iter().all(|item| item.text != "基本信息"));
    }

    #[test]
    fn breadcrumbs_fall_back_to_raw_segments() {
        let items = menu_config();
        assert_eq!(
            breadcrumb_trail(&items, "/product/spec"),
            vec!["首页", "产品管理", "规格管理"]
        );
        assert_eq!(
            breadcrumb_trail(&items, "/warehouse/area"),
            vec!["首页", "warehouse", "area"]
        );
        assert_eq!(breadcrumb_trail(&items, "/"), vec!["首页"]);
    }

    #[test]
    fn unknown_paths_route_to_not_found() {
        assert_eq!(Route::from_path("/warehouse/list"), Route::NotFound);
        assert_eq!(Route::from_path("/product/list"), Route::ProductList);
    }
}
