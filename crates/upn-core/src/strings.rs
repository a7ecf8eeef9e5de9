// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// User-facing text. The app ships in Russian only; the exact wording is part
// of what users see in dialogs and empty states, so keep it in one place.

pub const SERVICES_TITLE: &str = "Сервисы";

pub const LOADING: &str = "Загрузка...";

pub const EMPTY_TITLE: &str = "Нет сервисов";
pub const EMPTY_SUBTITLE: &str = "Нажмите «+», чтобы добавить первый сервис";

// -- Long-press action menu --
pub const ACTION_MENU_MESSAGE: &str = "Выберите действие";
pub const CANCEL: &str = "Отмена";
pub const EDIT: &str = "Редактировать";
pub const DELETE: &str = "Удалить";

// -- Delete confirmation --
pub const DELETE_TITLE: &str = "Удалить сервис";

/// Body of the second delete confirmation, naming the service.
pub fn delete_confirmation(name: &str) -> String {
    format!("Вы уверены, что хотите удалить «{name}»?")
}

// -- Failure alert --
pub const ERROR_TITLE: &str = "Ошибка";
pub const DELETE_FAILED: &str = "Не удалось удалить сервис";

// -- Detail / edit / add views --
pub const ADD_SERVICE_TITLE: &str = "Новый сервис";
pub const EDIT_SERVICE_TITLE: &str = "Редактирование";
pub const NAME_LABEL: &str = "Название";
pub const NAME_PLACEHOLDER: &str = "Введите название сервиса";
pub const CHOOSE_LOGO: &str = "Выбрать логотип";
pub const REMOVE_LOGO: &str = "Убрать логотип";
pub const LOGO_INVALID: &str = "Файл не является изображением";
pub const SAVE: &str = "Сохранить";
pub const BACK: &str = "Назад";
pub const CREATED_AT: &str = "Добавлен";
pub const LOAD_FAILED: &str = "Не удалось загрузить сервис";
pub const SAVE_FAILED: &str = "Не удалось сохранить сервис";
pub const NAME_REQUIRED: &str = "Введите название";

// -- Usage on the detail view --
pub const USED_BY_TITLE: &str = "Использовался с номеров";
pub const USED_BY_EMPTY: &str = "Ещё не использовался";
pub const USAGE_FAILED: &str = "Не удалось загрузить использование";
