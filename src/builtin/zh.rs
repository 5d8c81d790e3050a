/// Simplified Chinese UI strings, grouped by page area.
pub(super) const UI: &[(&str, &str)] = &[
    // hero
    ("hero.title", "使用响应式精度轻松创建 UI"),
    ("hero.subtitle", "Solid 是当今 Web 的现代 JavaScript 框架"),
    ("hero.subtitle.start", "细粒度响应式全栈开发"),
    ("hero.button.primary", "开始使用"),
    ("hero.button.secondary", "加入社区"),
    // main navigation
    ("main.nav.tab.learn", "学习"),
    ("main.nav.tab.reference", "参考"),
    ("main.nav.section.concepts", "概念"),
    ("main.nav.section.components", "组件"),
    ("main.nav.section.control.flow", "控制流"),
    ("main.nav.section.derived.values", "Derived Values"),
    ("main.nav.section.routing", "Routing"),
    ("main.nav.section.advanced.concepts", "Advanced Concepts"),
    ("main.nav.section.guides", "Guides"),
    ("main.nav.section.configuration", "Configuration"),
    ("main.nav.section.basic.reactivity", "Basic Reactivity"),
    ("main.nav.section.component.apis", "Component APIs"),
    ("main.nav.section.jsx.attributes", "JSX Attributes"),
    ("main.nav.section.lifecycle", "Lifecycle"),
    ("main.nav.section.reactive.utilities", "Reactive Utilities"),
    ("main.nav.section.rendering", "Rendering"),
    ("main.nav.section.secondary.primitives", "Secondary Primitives"),
    ("main.nav.section.stores", "Stores"),
    ("main.nav.section.solid.router", "Solid-Router"),
    ("main.nav.section.solid.router.components", "Components"),
    ("main.nav.section.solid.router.data.apis", "Data APIs"),
    ("main.nav.section.solid.router.load.functions", "Load Functions"),
    ("main.nav.section.solid.router.primitives", "Primitives"),
    ("main.nav.no.routes", "No routes found"),
    // ToC
    ("toc.this.page", "目录"),
    ("toc.overview", "前言"),
    ("contribute.title", "贡献"),
    ("contribute.edit", "编辑此页面"),
    ("contribute.report", "报告此页面问题"),
    // pagination
    ("pagination.next", "下一个"),
    ("pagination.previous", "上一个"),
    // 404
    ("missing.translation", "这部分还没有被翻译"),
];
